//! Domain Layer
//!
//! View models of the backend resources plus the client-owned settings.
//! Authoritative invariants live on the server.

mod entity;
mod menu_item;
mod order;
mod table;
mod feedback;
mod daily_menu;
mod auth;
mod dashboard;
mod customer;
mod settings;

pub use entity::{Entity, upsert, remove_by_id, find_by_id};
pub use menu_item::{MenuItem, MenuItemPayload, Category};
pub use order::{
    Order, OrderItem, OrderStatus, PaymentStatus, UpdateOrderRequest, set_payment_status,
    OrderLineRequest, PlaceOrderRequest, PlaceOrderResponse,
};
pub use table::{Table, CreateTableRequest};
pub use feedback::{Feedback, FeedbackPage, FeedbackStats, SubmitFeedbackRequest};
pub use daily_menu::{DailyMenuEntry, DailyMenuPayload};
pub use auth::{LoginRequest, LoginResponse, RegisterRequest, MessageResponse, UserSession};
pub use dashboard::{DashboardStats, RecentOrder, TopItem, RecentFeedback};
pub use customer::{TableMenu, CustomerSession, TrackSessionRequest};
pub use settings::{RestaurantSettings, SystemPreferences};
