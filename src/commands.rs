//! Tauri Command Wrappers
//!
//! Frontend bindings to backend commands.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::models::{OpResult, StockItem};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"])]
    async fn invoke(cmd: &str, args: JsValue) -> JsValue;
}

// ========================
// Command Argument Structs
// ========================

#[derive(Serialize)]
pub struct AddStockArgs<'a> {
    pub brand: &'a str,
    pub quantity: i64,
    pub price: f64,
    pub description: Option<&'a str>,
}

#[derive(Serialize)]
pub struct UpdateStockArgs<'a> {
    pub id: &'a str,
    pub brand: &'a str,
    pub quantity: i64,
    pub price: f64,
    pub description: Option<&'a str>,
}

#[derive(Serialize)]
pub struct IdArgs<'a> {
    pub id: &'a str,
}

#[derive(Serialize)]
pub struct SetQuantityArgs<'a> {
    pub id: &'a str,
    pub quantity: i64,
}

#[derive(Serialize)]
pub struct PasswordArgs<'a> {
    pub password: &'a str,
}

fn failed(e: impl ToString) -> OpResult {
    OpResult::fail(e.to_string())
}

// ========================
// Stock Commands
// ========================

pub async fn list_stock() -> Result<Vec<StockItem>, String> {
    let result = invoke("list_stock", JsValue::NULL).await;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn add_stock(args: &AddStockArgs<'_>) -> OpResult {
    let js_args = match serde_wasm_bindgen::to_value(args) {
        Ok(v) => v,
        Err(e) => return failed(e),
    };
    let result = invoke("add_stock", js_args).await;
    serde_wasm_bindgen::from_value(result).unwrap_or_else(failed)
}

pub async fn update_stock(args: &UpdateStockArgs<'_>) -> OpResult {
    let js_args = match serde_wasm_bindgen::to_value(args) {
        Ok(v) => v,
        Err(e) => return failed(e),
    };
    let result = invoke("update_stock", js_args).await;
    serde_wasm_bindgen::from_value(result).unwrap_or_else(failed)
}

pub async fn delete_stock(id: &str) -> OpResult {
    let js_args = match serde_wasm_bindgen::to_value(&IdArgs { id }) {
        Ok(v) => v,
        Err(e) => return failed(e),
    };
    let result = invoke("delete_stock", js_args).await;
    serde_wasm_bindgen::from_value(result).unwrap_or_else(failed)
}

pub async fn set_stock_quantity(id: &str, quantity: i64) -> OpResult {
    let js_args = match serde_wasm_bindgen::to_value(&SetQuantityArgs { id, quantity }) {
        Ok(v) => v,
        Err(e) => return failed(e),
    };
    let result = invoke("set_stock_quantity", js_args).await;
    serde_wasm_bindgen::from_value(result).unwrap_or_else(failed)
}

// ========================
// Session Commands
// ========================

pub async fn login_admin(password: &str) -> OpResult {
    let js_args = match serde_wasm_bindgen::to_value(&PasswordArgs { password }) {
        Ok(v) => v,
        Err(e) => return failed(e),
    };
    let result = invoke("login_admin", js_args).await;
    serde_wasm_bindgen::from_value(result).unwrap_or_else(failed)
}

pub async fn verify_admin() -> OpResult {
    let result = invoke("verify_admin", JsValue::NULL).await;
    serde_wasm_bindgen::from_value(result).unwrap_or_else(failed)
}

pub async fn logout_admin() -> OpResult {
    let result = invoke("logout_admin", JsValue::NULL).await;
    serde_wasm_bindgen::from_value(result).unwrap_or_else(failed)
}
