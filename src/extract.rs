//! Extract and render externsync requirements for a single command.

use crate::buffers::{Category, SyncBuffers};
use crate::conventions::Conventions;
use crate::deref;
use crate::model::{Command, Param};
use tracing::{debug, warn};

/// A rendered bullet line and the include file it belongs in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncLine {
    pub category: Category,
    /// Complete line, `"* "` prefix and trailing newline included
    pub text: String,
}

/// Upper-case the first character, leaving the rest untouched.
pub fn upper_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Render every externsync requirement of `cmd`, in visit order:
/// explicit parameter annotations, implicit entries, then the
/// command-pool convention line.
pub fn extract(cmd: &Command, conventions: &dyn Conventions) -> Vec<SyncLine> {
    let link = conventions.command_link(&cmd.name);
    let mut lines = Vec::new();

    for param in &cmd.params {
        let Some(ref annotation) = param.externsync else {
            continue;
        };
        for value in annotation.split(',') {
            let value = value.trim();
            if value.is_empty() {
                warn!(
                    command = %cmd.name,
                    param = %param.name,
                    "skipping empty externsync value"
                );
                continue;
            }
            let (sentence, category) = render_explicit(cmd, param, value, conventions);
            lines.push(SyncLine {
                category,
                text: format!("* {} in {}\n", sentence, link),
            });
        }
    }

    for entry in &cmd.implicit_externsync {
        if entry.trim().is_empty() {
            warn!(command = %cmd.name, "skipping empty implicit externsync entry");
            continue;
        }
        lines.push(SyncLine {
            category: Category::Implicit,
            text: format!("* {} in {}\n", upper_first(entry), link),
        });
    }

    if conventions.is_externsync_command(&cmd.name) {
        lines.push(SyncLine {
            category: Category::Implicit,
            text: format!("* {} in {}\n", conventions.externsync_owner_sentence(), link),
        });
    }

    debug!(command = %cmd.name, alias = ?cmd.alias, lines = lines.len(), "extracted");
    lines
}

/// Extract `cmd` and append its lines to the run's buffers.
pub fn process_command(cmd: &Command, conventions: &dyn Conventions, buffers: &mut SyncBuffers) {
    for line in extract(cmd, conventions) {
        buffers.append(line.category, &line.text);
    }
}

/// Render one annotation value. Anything phrased "element of" belongs in
/// the parameter-list include.
fn render_explicit(
    cmd: &Command,
    param: &Param,
    value: &str,
    conventions: &dyn Conventions,
) -> (String, Category) {
    let pname = conventions.param_name(&param.name);
    if value == "true" {
        return if param.is_array() {
            (
                format!("Each element of the {} parameter", pname),
                Category::ParameterLists,
            )
        } else if param.is_pointer() {
            (
                format!("The object referenced by the {} parameter", pname),
                Category::Parameters,
            )
        } else {
            (format!("The {} parameter", pname), Category::Parameters)
        };
    }

    match deref::parse(value) {
        Ok(path) => {
            let category = if path.has_array() {
                Category::ParameterLists
            } else {
                Category::Parameters
            };
            (path.render(conventions), category)
        }
        Err(e) => {
            warn!(
                command = %cmd.name,
                param = %param.name,
                error = %e,
                "rendering externsync value verbatim"
            );
            (
                format!("The {} parameter", conventions.param_name(value)),
                Category::Parameters,
            )
        }
    }
}
