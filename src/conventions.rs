//! API naming conventions: markup macros and the command-pool rule.

use regex::Regex;

/// Default boilerplate written as the first line of every include file.
pub const DEFAULT_WARNING_COMMENT: &str =
    "// WARNING: DO NOT MODIFY! This file is automatically generated from the vk.xml registry";

/// Commands recorded into a command buffer.
pub const DEFAULT_EXTERNSYNC_PATTERN: &str = "^vkCmd";

pub const DEFAULT_OWNER_TYPE: &str = "VkCommandPool";
pub const DEFAULT_OWNER_PARAM: &str = "commandBuffer";

/// API-specific conventions consulted while rendering.
pub trait Conventions {
    /// Comment line placed at the top of each generated file.
    fn warning_comment(&self) -> &str;

    /// Whether `name` implicitly requires host synchronization of the
    /// resource its command buffer was allocated from.
    fn is_externsync_command(&self, name: &str) -> bool;

    fn param_name(&self, name: &str) -> String {
        format!("pname:{}", name)
    }

    fn struct_name(&self, name: &str) -> String {
        format!("sname:{}", name)
    }

    fn command_link(&self, name: &str) -> String {
        format!("flink:{}", name)
    }

    /// Sentence emitted for commands matching [`Conventions::is_externsync_command`].
    fn externsync_owner_sentence(&self) -> String;
}

/// Configurable conventions; `Default` matches the Vulkan registry.
#[derive(Debug, Clone)]
pub struct ApiConventions {
    pub warning_comment: String,
    pub externsync_pattern: Regex,
    pub owner_type: String,
    pub owner_param: String,
}

impl Default for ApiConventions {
    fn default() -> Self {
        Self {
            warning_comment: DEFAULT_WARNING_COMMENT.to_string(),
            externsync_pattern: Regex::new(DEFAULT_EXTERNSYNC_PATTERN)
                .expect("default externsync pattern is valid"),
            owner_type: DEFAULT_OWNER_TYPE.to_string(),
            owner_param: DEFAULT_OWNER_PARAM.to_string(),
        }
    }
}

impl Conventions for ApiConventions {
    fn warning_comment(&self) -> &str {
        &self.warning_comment
    }

    fn is_externsync_command(&self, name: &str) -> bool {
        self.externsync_pattern.is_match(name)
    }

    fn externsync_owner_sentence(&self) -> String {
        format!(
            "The {} that {} was allocated from,",
            self.struct_name(&self.owner_type),
            self.param_name(&self.owner_param)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rule_matches_cmd_prefix() {
        let conv = ApiConventions::default();
        assert!(conv.is_externsync_command("vkCmdDraw"));
        assert!(!conv.is_externsync_command("vkQueueSubmit"));
        assert!(!conv.is_externsync_command("xvkCmdDraw"));
    }

    #[test]
    fn owner_sentence() {
        let conv = ApiConventions::default();
        assert_eq!(
            conv.externsync_owner_sentence(),
            "The sname:VkCommandPool that pname:commandBuffer was allocated from,"
        );
    }

    #[test]
    fn markup_helpers() {
        let conv = ApiConventions::default();
        assert_eq!(conv.param_name("fence"), "pname:fence");
        assert_eq!(conv.command_link("vkResetFences"), "flink:vkResetFences");
    }
}
