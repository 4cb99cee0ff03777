//! 商品目录数据模型

use serde::{Deserialize, Serialize, Serializer};

/// 商品记录，进程生命周期内只读
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    #[serde(serialize_with = "serialize_amount")]
    pub price: f64,
    pub image: String,
    #[serde(serialize_with = "serialize_amount")]
    pub rating: f64,
}

impl Product {
    pub fn new(id: u32, name: impl Into<String>, price: f64, image: impl Into<String>, rating: f64) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            image: image.into(),
            rating,
        }
    }
}

/// 整数金额输出为 JSON 整数（999 而不是 999.0）
fn serialize_amount<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// 按 JavaScript 数字的习惯格式化金额：`999`、`4.5`
pub fn format_amount(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
