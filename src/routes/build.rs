use super::parse::RawRoute;
use super::types::{RouteEntry, RouteTarget, Verb, STATIC_PREFIX, WILDCARD_METHOD};
use crate::controller::ControllerLoader;
use crate::errors::RouteError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Expand one tokenized line into its concrete route entries.
///
/// - A `staticDir:` target yields a single static-mount entry.
/// - A `{method}` wildcard target loads the controller through `loader` and
///   yields one entry per callable export, with the path's wildcard token
///   replaced by the export's name. A controller that cannot be loaded is
///   fatal; a controller with no callable exports yields nothing.
/// - Anything else yields exactly one handler entry.
///
/// The verb is validated per produced entry, so a wildcard line with a bad
/// verb fails once, on its first expanded entry.
pub fn build_entries(
    raw: &RawRoute,
    loader: &dyn ControllerLoader,
    controllers_dir: &Path,
) -> Result<Vec<RouteEntry>, RouteError> {
    if raw.is_static() {
        let dir = &raw.target[STATIC_PREFIX.len()..];
        let verb = Verb::parse(&raw.verb, &raw.path)?;
        return Ok(vec![RouteEntry {
            verb,
            path_pattern: raw.path.clone(),
            target: RouteTarget::StaticDir(PathBuf::from(dir)),
        }]);
    }

    let (controller, method) = raw.split_target();

    if raw.is_wildcard() {
        let module = loader.load(&controllers_dir.join(controller))?;
        let mut entries = Vec::new();
        for name in module.handler_names() {
            let verb = Verb::parse(&raw.verb, &raw.path)?;
            entries.push(RouteEntry {
                verb,
                path_pattern: raw.path.replace(WILDCARD_METHOD, name),
                target: RouteTarget::Handler {
                    controller: controller.to_string(),
                    method: name.to_string(),
                },
            });
        }
        debug!(
            controller = %controller,
            path = %raw.path,
            expanded = entries.len(),
            "wildcard route expanded"
        );
        return Ok(entries);
    }

    let verb = Verb::parse(&raw.verb, &raw.path)?;
    Ok(vec![RouteEntry {
        verb,
        path_pattern: raw.path.clone(),
        target: RouteTarget::Handler {
            controller: controller.to_string(),
            method: method.to_string(),
        },
    }])
}
