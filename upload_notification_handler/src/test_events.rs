use aws_lambda_events::s3::S3Event;
use serde_json::{Value, json};

// trimmed copy of the s3 put test event from the lambda console
pub fn s3_record(bucket: Option<&str>, key: Option<&str>) -> Value {
    json!({
        "eventVersion": "2.0",
        "eventSource": "aws:s3",
        "awsRegion": "us-east-1",
        "eventTime": "1970-01-01T00:00:00.000Z",
        "eventName": "ObjectCreated:Put",
        "userIdentity": { "principalId": "EXAMPLE" },
        "requestParameters": { "sourceIPAddress": "127.0.0.1" },
        "responseElements": {
            "x-amz-request-id": "EXAMPLE123456789",
            "x-amz-id-2": "EXAMPLE123/5678abcdefghijklambdaisawesome/mnopqrstuvwxyzABCDEFGH"
        },
        "s3": {
            "s3SchemaVersion": "1.0",
            "configurationId": "testConfigRule",
            "bucket": {
                "name": bucket,
                "ownerIdentity": { "principalId": "EXAMPLE" },
                "arn": "arn:aws:s3:::example-bucket"
            },
            "object": {
                "key": key,
                "size": 1024,
                "eTag": "0123456789abcdef0123456789abcdef",
                "sequencer": "0A1B2C3D4E5F678901"
            }
        }
    })
}

pub fn s3_event(records: Vec<Value>) -> S3Event {
    serde_json::from_value(json!({ "Records": records })).unwrap()
}

pub fn upload(bucket: &str, key: &str) -> S3Event {
    s3_event(vec![s3_record(Some(bucket), Some(key))])
}
