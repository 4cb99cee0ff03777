//! 店面：在终端中展示商品目录并维护会话内的购物车

pub mod cart;
pub mod session;
pub mod shell;
pub mod view;

pub use cart::Cart;
pub use session::{Notification, Storefront};
pub use shell::Shell;
