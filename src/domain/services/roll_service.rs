// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use rand::rngs::ThreadRng;
use rand::Rng;
use thiserror::Error;
use tracing::debug;

use crate::domain::models::roll_payload::{DiceSpec, RollPayload};
use crate::domain::models::roll_result::{Roll, RollResponse, Step};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollError {
    /// 修正值不受约束，点数与修正值之和可能超出 i64
    #[error("Roll total does not fit in a 64-bit integer")]
    TotalOverflow,
}

/// 投掷服务
///
/// 只接受已校验的 `RollPayload`，因此面数总是至少为 1
pub struct RollService<R = ThreadRng> {
    rng: R,
}

impl RollService<ThreadRng> {
    pub fn new() -> Self {
        Self::with_rng(rand::rng())
    }
}

impl Default for RollService<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RollService<R> {
    /// 使用指定的随机数生成器创建服务
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// 执行投掷
    ///
    /// 按 `payload.count()` 重复整体投掷，每一步依次投掷所有骰子组。
    /// 任何合计溢出时返回 `RollError::TotalOverflow`，不会回绕
    pub fn roll(&mut self, payload: &RollPayload) -> Result<RollResponse, RollError> {
        let step = (0..payload.count())
            .map(|_| self.roll_step(payload.dice()))
            .collect::<Result<Vec<Step>, RollError>>()?;

        debug!(
            steps = step.len(),
            groups = payload.dice().len(),
            "Payload rolled"
        );

        Ok(RollResponse { step })
    }

    fn roll_step(&mut self, dice: &[DiceSpec]) -> Result<Step, RollError> {
        let rolls = dice
            .iter()
            .map(|d| self.roll_group(d))
            .collect::<Result<Vec<Roll>, RollError>>()?;
        let total = checked_total(0, rolls.iter().map(|r| r.total))?;
        Ok(Step { rolls, total })
    }

    fn roll_group(&mut self, dice: &DiceSpec) -> Result<Roll, RollError> {
        let rolls: Vec<i64> = (0..dice.count())
            .map(|_| self.rng.random_range(1..=dice.sides()))
            .collect();
        metrics::counter!("dice_rolled_total").increment(rolls.len() as u64);

        let total = checked_total(dice.modifier(), rolls.iter().copied())?;
        Ok(Roll {
            count: dice.count(),
            sides: dice.sides(),
            modifier: dice.modifier(),
            rolls,
            total,
        })
    }
}

fn checked_total(start: i64, mut values: impl Iterator<Item = i64>) -> Result<i64, RollError> {
    values
        .try_fold(start, |acc, value| acc.checked_add(value))
        .ok_or(RollError::TotalOverflow)
}
