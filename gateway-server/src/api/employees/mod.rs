//! Employee API Module
//!
//! 代理路由：所有请求委托给上游员工服务，本地只做校验与聚合。
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/v1/employee | GET | 全量员工列表 |
//! | /api/v1/employee/search/{q} | GET | 按姓名片段过滤 |
//! | /api/v1/employee/{id} | GET | 按 ID 查询 |
//! | /api/v1/employee/highest-salary | GET | 最高工资 |
//! | /api/v1/employee/top-10-highest-earning | GET | 工资前十姓名 |
//! | /api/v1/employee | POST | 创建员工 |
//! | /api/v1/employee/{id} | DELETE | 删除员工, 返回姓名 |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Employee router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/v1/employee", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/search/{q}", get(handler::search))
        .route("/highest-salary", get(handler::highest_salary))
        .route("/top-10-highest-earning", get(handler::top_earner_names))
        .route("/{id}", get(handler::get_by_id).delete(handler::delete))
}
