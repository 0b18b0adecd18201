use aws_sdk_ecs::error::BuildError;
use aws_sdk_ecs::types::{AssignPublicIp, AwsVpcConfiguration, LaunchType, NetworkConfiguration};

use crate::config::LauncherConfig;

pub const DESIRED_COUNT: i32 = 1;

/// Payload of a single RunTask call. Built fresh per invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct MigrationTaskRequest {
    pub cluster: String,
    pub task_definition: String,
    pub subnets: Vec<String>,
    launch_type: LaunchType,
    count: i32,
    assign_public_ip: AssignPublicIp,
}

impl MigrationTaskRequest {
    pub fn from_config(config: &LauncherConfig) -> Self {
        Self {
            cluster: config.cluster_name.clone(),
            task_definition: config.task_definition.clone(),
            subnets: config.subnet_ids(),
            launch_type: LaunchType::Fargate,
            count: DESIRED_COUNT,
            assign_public_ip: AssignPublicIp::Disabled,
        }
    }

    pub fn launch_type(&self) -> &LaunchType {
        &self.launch_type
    }

    pub fn count(&self) -> i32 {
        self.count
    }

    pub fn assign_public_ip(&self) -> &AssignPublicIp {
        &self.assign_public_ip
    }

    pub fn awsvpc_configuration(&self) -> Result<AwsVpcConfiguration, BuildError> {
        AwsVpcConfiguration::builder()
            .set_subnets(Some(self.subnets.clone()))
            .assign_public_ip(self.assign_public_ip.clone())
            .build()
    }

    pub fn network_configuration(&self) -> Result<NetworkConfiguration, BuildError> {
        Ok(NetworkConfiguration::builder()
            .awsvpc_configuration(self.awsvpc_configuration()?)
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(cluster: &str, task_definition: &str, subnets: &str) -> LauncherConfig {
        LauncherConfig::builder()
            .cluster_name(cluster)
            .task_definition(task_definition)
            .subnets(subnets)
            .build()
    }

    #[test]
    fn test_request_from_config() {
        let request = MigrationTaskRequest::from_config(&config(
            "prod-cluster",
            "liquibase-migrate:3",
            "subnet-111,subnet-222",
        ));

        assert_eq!(request.cluster, "prod-cluster");
        assert_eq!(request.task_definition, "liquibase-migrate:3");
        assert_eq!(request.subnets, vec!["subnet-111", "subnet-222"]);
    }

    #[test]
    fn test_fixed_fields_ignore_input() {
        for (cluster, task_def, subnets) in [
            ("prod-cluster", "liquibase-migrate:3", "subnet-111"),
            ("", "", ""),
            ("a", "b", ",,,"),
        ] {
            let request = MigrationTaskRequest::from_config(&config(cluster, task_def, subnets));

            assert_eq!(request.launch_type(), &LaunchType::Fargate);
            assert_eq!(request.count(), 1);
            assert_eq!(request.assign_public_ip(), &AssignPublicIp::Disabled);
        }
    }

    #[test]
    fn test_network_configuration() {
        let request = MigrationTaskRequest::from_config(&config("c", "t", "subnet-a,subnet-b"));
        let network = request.network_configuration().unwrap();
        let vpc = network.awsvpc_configuration().unwrap();

        assert_eq!(vpc.subnets(), ["subnet-a", "subnet-b"]);
        assert_eq!(vpc.assign_public_ip(), Some(&AssignPublicIp::Disabled));
        assert!(vpc.security_groups().is_empty());
    }

    #[test]
    fn test_empty_subnets_pass_through() {
        let request = MigrationTaskRequest::from_config(&config("c", "t", ""));
        let vpc = request.awsvpc_configuration().unwrap();

        assert_eq!(vpc.subnets(), [""]);
    }
}
