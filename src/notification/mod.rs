pub mod dispatcher;
pub mod notification_models;
pub mod notification_repository;
pub mod notification_service;
pub mod notification_store;

pub use notification_models::Notification;
pub use notification_repository::NotificationRepository;
pub use notification_service::NotificationService;
pub use notification_store::NotificationStore;
