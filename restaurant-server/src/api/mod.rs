//! API 路由模块
//!
//! - [`health`] - 健康检查
//! - [`menus`] - 菜单 (删除时级联删除菜品)
//! - [`food`] - 菜品、分页列表、点单排行
//! - [`tables`] - 桌台
//! - [`orders`] - 订单
//! - [`order_items`] - 订单明细及按订单汇总
//! - [`invoices`] - 发票及发票视图

pub mod health;

pub mod food;
pub mod invoices;
pub mod menus;
pub mod order_items;
pub mod orders;
pub mod tables;
