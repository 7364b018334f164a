pub mod miniflux;
pub mod notification;
