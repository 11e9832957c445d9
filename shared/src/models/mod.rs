//! Wire models shared between the gateway and the upstream contract

mod employee;

pub use employee::{Employee, EmployeeCreate};
