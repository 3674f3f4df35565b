use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpsertProfileInput {
    #[validate(length(max = 1000))]
    pub bio: Option<String>,
}
