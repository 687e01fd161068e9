use async_trait::async_trait;
use aws_sdk_ec2::error::DisplayErrorContext;
use compute::{ComputeControl, ComputeError};

/// EC2-backed compute control.
pub struct Ec2ComputeControl {
    ec2_client: aws_sdk_ec2::Client,
}

impl Ec2ComputeControl {
    pub fn new(ec2_client: aws_sdk_ec2::Client) -> Ec2ComputeControl {
        Ec2ComputeControl { ec2_client }
    }
}

#[async_trait]
impl ComputeControl for Ec2ComputeControl {
    async fn stop_instance(&self, instance_id: &str) -> Result<(), ComputeError> {
        self.ec2_client
            .stop_instances()
            .instance_ids(instance_id)
            .send()
            .await
            .map_err(|err| ComputeError::Rejected(format!("{}", DisplayErrorContext(&err))))?;

        Ok(())
    }
}
