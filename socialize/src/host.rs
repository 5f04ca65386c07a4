//! Collaborators the host application supplies.

use socialize_types::Entity;

/// Permission the push service needs to deliver messages.
pub const RECEIVE_PERMISSION: &str = "com.google.android.c2dm.permission.RECEIVE";

/// The app-scoped permission guarding push messages for `package`.
pub fn message_permission(package: &str) -> String {
    format!("{package}.permission.C2D_MESSAGE")
}

/// Answers permission queries for the host app.
pub trait PermissionCheck: Send + Sync {
    fn package_name(&self) -> &str;

    fn has_permission(&self, permission: &str) -> bool;
}

/// Opens an entity inside the host app, e.g. when a notification is tapped.
pub trait EntityLoader: Send + Sync {
    fn can_load(&self, _entity: &Entity) -> bool {
        true
    }

    fn load_entity(&self, entity: &Entity);
}
