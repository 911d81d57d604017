use super::core::Router;
use crate::errors::RouteError;
use crate::host::HostApp;
use crate::routes::RouteTarget;
use tracing::{debug, info};

impl Router {
    /// Bind the compiled route table against a host serving object.
    ///
    /// Publishes the [`UrlMap`](super::UrlMap) into the host's shared
    /// template context under `config.template_var`, then walks the table in
    /// order: static mounts are verified to point at an existing directory
    /// and handed to [`HostApp::mount_static`]; handler entries are resolved
    /// through the controller loader and handed to [`HostApp::register`].
    ///
    /// # Errors
    ///
    /// Any table-construction error, plus
    /// [`StaticPathInvalid`](RouteError::StaticPathInvalid),
    /// [`ControllerNotFound`](RouteError::ControllerNotFound), and
    /// [`MethodNotFound`](RouteError::MethodNotFound) for wiring failures.
    /// A named export that exists but is not callable counts as missing.
    pub fn bind_routes(&self, host: &mut dyn HostApp) -> Result<(), RouteError> {
        host.publish(&self.config().template_var, self.url_map()?);

        let routes = self.get_routes()?;
        let controllers_dir = self.config().controllers_dir();

        for entry in routes {
            match &entry.target {
                RouteTarget::StaticDir(dir) => {
                    let full = self.config().root_path.join(dir);
                    if !self.source().is_directory(&full) {
                        return Err(RouteError::StaticPathInvalid { path: full });
                    }
                    debug!(
                        prefix = %entry.path_pattern,
                        dir = %full.display(),
                        "static directory mounted"
                    );
                    host.mount_static(&entry.path_pattern, &full);
                }
                RouteTarget::Handler { controller, method } => {
                    let module = self.loader().load(&controllers_dir.join(controller))?;
                    let handler =
                        module
                            .get_handler(method)
                            .ok_or_else(|| RouteError::MethodNotFound {
                                controller: controller.clone(),
                                method: method.clone(),
                            })?;
                    host.register(entry.verb, &entry.path_pattern, handler.clone());
                }
            }
        }

        info!(
            route_count = routes.len(),
            template_var = %self.config().template_var,
            "routes bound to host"
        );
        Ok(())
    }
}
