//! Employee Mock Server - 上游员工服务的内存模拟
//!
//! 复刻真实上游的线路契约, 供本地开发和集成测试使用:
//!
//! | 路径 | 方法 | 应答 |
//! |------|------|------|
//! | /api/v1/employee | GET | `{"data": [...]}` 读取形状 |
//! | /api/v1/employee/{id} | GET | `{"data": employee-or-null}`, 未知 ID 也是 200 |
//! | /api/v1/employee/create | POST | create 形状信封, 分配 UUID |
//! | /api/v1/employee/delete/{id} | DELETE | 纯文本, 成功时含固定标记子串 |

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get, post},
};
use parking_lot::Mutex;
use serde::Deserialize;
use serde_json::{Value, json};
use shared::Employee;
use uuid::Uuid;

/// 内存存储, 保持插入顺序
#[derive(Default)]
pub struct Store {
    employees: Mutex<Vec<Employee>>,
}

type AppState = Arc<Store>;

/// create 请求体 (裸字段名; title/email 两种写法都接受)
#[derive(Deserialize)]
struct CreateRequest {
    name: String,
    salary: String,
    age: String,
    #[serde(alias = "employee_title", default)]
    title: String,
    #[serde(alias = "employee_email", default)]
    email: String,
}

/// 空存储的路由
pub fn app() -> Router {
    app_with_seed(Vec::new())
}

/// 预置数据的路由
pub fn app_with_seed(seed: Vec<Employee>) -> Router {
    let store = Arc::new(Store {
        employees: Mutex::new(seed),
    });
    Router::new()
        .route("/api/v1/employee", get(list))
        .route("/api/v1/employee/create", post(create))
        .route("/api/v1/employee/delete/{id}", delete(remove))
        .route("/api/v1/employee/{id}", get(get_by_id))
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .with_state(store)
}

/// 常用测试种子: 十二名员工, 一名明显最高薪
pub fn seed_employees() -> Vec<Employee> {
    let mut employees: Vec<Employee> = (1..=11)
        .map(|i| Employee {
            id: format!("e-{i:02}"),
            name: format!("Employee {i:02}"),
            salary: format!("{}", 40000 + i * 1000),
            age: "35".to_string(),
            title: "Engineer".to_string(),
            email: format!("employee{i:02}@corp.example"),
        })
        .collect();
    employees.push(Employee {
        id: "e-99".to_string(),
        name: "Top Earner".to_string(),
        salary: "250000".to_string(),
        age: "48".to_string(),
        title: "Director".to_string(),
        email: "top@corp.example".to_string(),
    });
    employees
}

/// 在指定监听器上运行
pub async fn run(listener: tokio::net::TcpListener) -> std::io::Result<()> {
    let addr = listener.local_addr()?;
    tracing::info!("🦀 Employee Mock listening on {}", addr);
    axum::serve(listener, app_with_seed(seed_employees())).await
}

/// 绑定临时端口并在后台运行 (集成测试用)
pub async fn spawn(seed: Vec<Employee>) -> std::io::Result<SocketAddr> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let router = app_with_seed(seed);
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    Ok(addr)
}

async fn list(State(store): State<AppState>) -> Json<Value> {
    let employees = store.employees.lock().clone();
    Json(json!({
        "data": employees,
        "status": "Successfully processed request."
    }))
}

async fn get_by_id(State(store): State<AppState>, Path(id): Path<String>) -> Json<Value> {
    let found = store.employees.lock().iter().find(|e| e.id == id).cloned();
    Json(json!({
        "data": found,
        "status": "Successfully processed request."
    }))
}

async fn create(State(store): State<AppState>, Json(req): Json<CreateRequest>) -> Json<Value> {
    let employee = Employee {
        id: Uuid::new_v4().to_string(),
        name: req.name,
        salary: req.salary,
        age: req.age,
        title: req.title,
        email: req.email,
    };
    store.employees.lock().push(employee.clone());
    // create 应答形状: 裸 name/salary/age, 前缀 title/email
    Json(json!({
        "data": {
            "id": employee.id,
            "name": employee.name,
            "salary": employee.salary,
            "age": employee.age,
            "employee_title": employee.title,
            "employee_email": employee.email,
        },
        "status": "Successfully processed request."
    }))
}

async fn remove(State(store): State<AppState>, Path(id): Path<String>) -> String {
    let mut employees = store.employees.lock();
    let before = employees.len();
    employees.retain(|e| e.id != id);
    if employees.len() < before {
        format!("successfully! deleted Record with id {id}")
    } else {
        format!("failed to delete Record with id {id}")
    }
}
