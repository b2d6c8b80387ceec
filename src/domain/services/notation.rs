// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 骰子表达式解析
//!
//! 支持形如 `2d6 + 3 + 1d20 - 1` 的表达式：一个或多个 `NdS` 投掷项以 `+` 连接，
//! 每个投掷项后面最多跟一个 `+M` 或 `-M` 修正项。空白字符会被忽略。

use thiserror::Error;

use crate::application::dto::roll_payload::{DiceSpecDto, RollPayloadDto, DEFAULT_COUNT};
use crate::domain::models::roll_payload::RollPayload;
use crate::utils::errors::PayloadError;

#[derive(Error, Debug)]
pub enum NotationError {
    #[error("No dice roll provided. Dice roll is in the form \"1d4\"")]
    Empty,

    #[error("Invalid roll provided, {token}. Expected the form \"1d4\"")]
    InvalidRoll { token: String },

    #[error("Invalid modifier provided, {token}.")]
    InvalidModifier { token: String },

    #[error("Modifier provided before any dice roll. Dice roll is in the form \"1d4\"")]
    ModifierWithoutDice,

    #[error("Only one modifier is allowed per roll, {token} is extra")]
    DuplicateModifier { token: String },

    #[error(transparent)]
    Payload(#[from] PayloadError),
}

/// 解析表达式并校验结果
///
/// 语法错误返回对应的 `NotationError`，范围错误（例如 `101d6`）返回 `NotationError::Payload`
pub fn roll_payload_from_notation(input: &str) -> Result<RollPayload, NotationError> {
    let dto = parse_notation(input)?;
    Ok(RollPayload::try_from(dto)?)
}

/// 将表达式解析为未校验的请求，整体投掷次数固定为 1
pub fn parse_notation(input: &str) -> Result<RollPayloadDto, NotationError> {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return Err(NotationError::Empty);
    }

    let mut dice: Vec<DiceSpecDto> = Vec::new();
    let mut has_modifier = false;

    for (sign, body) in split_terms(&compact) {
        if body.contains('d') {
            if sign == '-' {
                return Err(NotationError::InvalidModifier {
                    token: format!("{}{}", sign, body),
                });
            }
            dice.push(parse_roll_term(body)?);
            has_modifier = false;
            continue;
        }

        let token = format!("{}{}", sign, body);
        let value = parse_number(body).ok_or_else(|| NotationError::InvalidModifier {
            token: token.clone(),
        })?;
        let last = dice.last_mut().ok_or(NotationError::ModifierWithoutDice)?;
        if has_modifier {
            return Err(NotationError::DuplicateModifier { token });
        }

        last.modifier = if sign == '-' { -value } else { value };
        has_modifier = true;
    }

    Ok(RollPayloadDto {
        dice,
        count: DEFAULT_COUNT,
    })
}

/// 按 `+`/`-` 切分，第一项隐含 `+`
fn split_terms(input: &str) -> Vec<(char, &str)> {
    let mut terms = Vec::new();
    let mut sign = '+';
    let mut start = 0;

    for (index, c) in input.char_indices() {
        if c == '+' || c == '-' {
            // A leading sign belongs to the first term.
            if index > 0 {
                terms.push((sign, &input[start..index]));
            }
            sign = c;
            start = index + c.len_utf8();
        }
    }
    terms.push((sign, &input[start..]));
    terms
}

fn parse_roll_term(token: &str) -> Result<DiceSpecDto, NotationError> {
    let invalid = || NotationError::InvalidRoll {
        token: token.to_string(),
    };

    let (count, sides) = token.split_once('d').ok_or_else(invalid)?;
    let count = parse_number(count).ok_or_else(invalid)?;
    let sides = parse_number(sides).ok_or_else(invalid)?;

    Ok(DiceSpecDto {
        count,
        sides,
        modifier: 0,
    })
}

/// 仅接受十进制数字，不接受符号
fn parse_number(token: &str) -> Option<i64> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}
