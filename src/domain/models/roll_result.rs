// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::fmt;

use serde::{Deserialize, Serialize};

/// 一次投掷请求的完整结果
///
/// 每个步骤对应请求中的一次整体重复投掷
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollResponse {
    pub step: Vec<Step>,
}

impl RollResponse {
    /// 第一个步骤（如果存在）
    pub fn first_step(&self) -> Option<&Step> {
        self.step.first()
    }
}

/// 单次整体投掷
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub rolls: Vec<Roll>,
    /// 所有骰子组合计（含修正值）
    pub total: i64,
}

/// 单组骰子的投掷结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roll {
    pub count: i64,
    pub sides: i64,
    pub modifier: i64,
    /// 每个骰子的点数
    pub rolls: Vec<i64>,
    /// 点数之和加修正值
    pub total: i64,
}

impl fmt::Display for Roll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let faces: Vec<String> = self.rolls.iter().map(|r| r.to_string()).collect();
        write!(f, "({})", faces.join(") + ("))?;

        if self.modifier > 0 {
            write!(f, " + {}", self.modifier)?;
        } else if self.modifier < 0 {
            write!(f, " - {}", self.modifier.unsigned_abs())?;
        }
        Ok(())
    }
}

/// 格式：`(3) + (5) + 2 + (17) = 27`
impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let groups: Vec<String> = self.rolls.iter().map(|r| r.to_string()).collect();
        write!(f, "{} = {}", groups.join(" + "), self.total)
    }
}
