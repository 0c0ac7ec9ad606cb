/// The configuration parameters for the lambda.
///
/// These are read once when the lambda cold starts and shared across invocations.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// The arn of the sns topic upload notifications are published to.
    /// Left unset when `SNS_TOPIC_ARN` is missing, in which case sns rejects the publish call.
    pub sns_topic_arn: Option<String>,
}

impl Config {
    pub fn new(sns_topic_arn: Option<&str>) -> Self {
        Config {
            sns_topic_arn: sns_topic_arn.map(str::to_string),
        }
    }

    pub fn from_env() -> Self {
        let sns_topic_arn = std::env::var("SNS_TOPIC_ARN").ok();
        Config::new(sns_topic_arn.as_deref())
    }
}
