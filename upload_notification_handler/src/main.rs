mod config;
mod handler;
mod model;
#[cfg(test)]
mod test_events;

use std::sync::Arc;

use aws_config::{BehaviorVersion, Region, meta::region::RegionProviderChain};
use aws_lambda_events::s3::S3Event;
use config::Config;
use handler::handler;
use lambda_runtime::{Error, LambdaEvent, run, service_fn, tracing};
use notifier_entrypoint::NotifierEntrypoint;
use sns_client::SNS;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let entrypoint = NotifierEntrypoint::default().init();

    tracing::trace!(environment=%entrypoint.environment(), "initiating lambda");

    let config = Config::from_env();
    if config.sns_topic_arn.is_none() {
        tracing::warn!("SNS_TOPIC_ARN is not set, publish calls will be sent without a topic");
    }

    tracing::trace!("initialized config");

    let region_provider = RegionProviderChain::default_provider().or_else(Region::new("us-east-1"));
    let aws_config = aws_config::defaults(BehaviorVersion::latest())
        .region(region_provider)
        .load()
        .await;
    let sns_client = SNS::new(aws_sdk_sns::Client::new(&aws_config));

    tracing::trace!("initialized sns client");

    // Shared references
    let shared_sns_client = Arc::new(sns_client);
    let shared_config = Arc::new(config);

    let func = service_fn(move |event: LambdaEvent<S3Event>| {
        let sns_client = shared_sns_client.clone();
        let config = shared_config.clone();
        async move { handler(sns_client.as_ref(), &config, event).await }
    });

    run(func).await
}
