// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::fmt;

use serde::Serialize;
use thiserror::Error;
use validator::{ValidationError, ValidationErrors, ValidationErrorsKind};

/// 载荷解析错误类型
///
/// 区分 JSON 解码失败与字段范围校验失败，两者都会终止构造
#[derive(Error, Debug)]
pub enum PayloadError {
    /// JSON 格式错误或字段类型不匹配
    #[error("Malformed payload: {0}")]
    Decode(#[from] serde_json::Error),

    /// 解码成功但存在字段违反约束
    #[error("Validation failed: {0}")]
    Validation(ValidationReport),
}

impl PayloadError {
    /// 返回校验报告（仅当错误为校验错误时）
    pub fn report(&self) -> Option<&ValidationReport> {
        match self {
            PayloadError::Validation(report) => Some(report),
            PayloadError::Decode(_) => None,
        }
    }
}

impl From<ValidationErrors> for PayloadError {
    fn from(errors: ValidationErrors) -> Self {
        PayloadError::Validation(ValidationReport::from(&errors))
    }
}

/// 单个字段的约束违规
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    /// JSON 路径，例如 `Count` 或 `Dice[0].Sides`
    pub field: String,
    /// 违反的约束名称，例如 `range`
    pub constraint: String,
    /// 可读的错误描述
    pub message: String,
}

/// 校验报告
///
/// 汇总一次校验中发现的全部违规，而不是只保留第一个
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    violations: Vec<FieldViolation>,
}

impl ValidationReport {
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// 所有违规字段的路径
    pub fn fields(&self) -> Vec<&str> {
        self.violations.iter().map(|v| v.field.as_str()).collect()
    }

    pub fn contains_field(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }
}

impl From<&ValidationErrors> for ValidationReport {
    fn from(errors: &ValidationErrors) -> Self {
        let mut collected = Vec::new();
        collect_violations(&mut Vec::new(), errors, &mut collected);
        // HashMap order is unstable; list indices compare numerically.
        collected.sort_by(|a, b| a.0.cmp(&b.0));
        Self {
            violations: collected.into_iter().map(|(_, v)| v).collect(),
        }
    }
}

/// 校验路径中的一段：字段名或列表下标
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum PathSegment {
    Field(String),
    Index(usize),
}

fn render_path(path: &[PathSegment]) -> String {
    let mut rendered = String::new();
    for segment in path {
        match segment {
            PathSegment::Field(name) => {
                if !rendered.is_empty() {
                    rendered.push('.');
                }
                rendered.push_str(name);
            }
            PathSegment::Index(index) => rendered.push_str(&format!("[{}]", index)),
        }
    }
    rendered
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .violations
            .iter()
            .map(|v| format!("{} {}", v.field, v.message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

fn collect_violations(
    path: &mut Vec<PathSegment>,
    errors: &ValidationErrors,
    out: &mut Vec<(Vec<PathSegment>, FieldViolation)>,
) {
    for (name, kind) in errors.errors() {
        path.push(PathSegment::Field(json_field_name(name)));

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    let violation = FieldViolation {
                        field: render_path(path),
                        constraint: error.code.to_string(),
                        message: describe(error),
                    };
                    out.push((path.clone(), violation));
                }
            }
            ValidationErrorsKind::Struct(nested) => collect_violations(path, nested, out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    path.push(PathSegment::Index(*index));
                    collect_violations(path, nested, out);
                    path.pop();
                }
            }
        }

        path.pop();
    }
}

/// 将 Rust 字段名转换为载荷中的 PascalCase 键名
fn json_field_name(name: &str) -> String {
    name.split('_')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

fn describe(error: &ValidationError) -> String {
    if let Some(message) = &error.message {
        return message.to_string();
    }

    if error.code == "range" {
        let param = |key: &str| {
            error
                .params
                .get(key)
                .map(|v| v.to_string())
                .unwrap_or_else(|| "?".to_string())
        };
        return format!(
            "must be between {} and {}, {} provided",
            param("min"),
            param("max"),
            param("value")
        );
    }

    format!("failed `{}` constraint", error.code)
}
