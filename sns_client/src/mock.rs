//! This module provides an [mockall::mock] concrete struct [MockTopicPublisher] which can be used for testing
use crate::{PublishRequest, TopicPublisher};
use mockall::mock;

const _NOT_PROD: () = const {
    assert!(
        cfg!(debug_assertions),
        "You are trying to include mock code in a production build please run `cargo tree -i sns_client -e features -p <FAILING_PACKAGE>` to see how the mock feature is being included in [dependencies]"
    );
};

/// Error returned by [MockTopicPublisher] expectations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct MockPublishError(pub String);

impl MockPublishError {
    pub fn new(msg: &str) -> Self {
        Self(msg.to_string())
    }
}

mock! {
    pub TopicPublisher {}
    impl TopicPublisher for TopicPublisher {
        type Err = MockPublishError;

        fn publish(&self, request: PublishRequest) -> impl Future<Output = Result<Option<String>, MockPublishError>> + Send;
    }
}
