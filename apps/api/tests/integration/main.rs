mod test_pagination;
mod test_posts_profiles;
