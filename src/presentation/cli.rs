// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 命令行投掷
//!
//! 从文件或标准输入读取骰子表达式，投掷后以文本或 JSON 输出

use clap::Parser;
use std::io::Read;
use std::path::PathBuf;
use thiserror::Error;

use crate::domain::services::notation::{self, NotationError};
use crate::domain::services::roll_service::{RollError, RollService};

/// 表示标准输入的路径参数
const STDIN: &str = "-";

#[derive(Debug, Parser)]
#[command(name = "roll")]
#[command(version)]
#[command(about = "Roll dice notation such as \"2d6 + 3\"", long_about = None)]
pub struct Cli {
    /// File containing the notation, or "-" for stdin
    #[arg(default_value = STDIN)]
    pub input: PathBuf,

    /// Print the full roll result as JSON
    #[arg(long)]
    pub as_json: bool,
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Notation(#[from] NotationError),

    #[error(transparent)]
    Roll(#[from] RollError),

    #[error("Failed to serialize result: {0}")]
    Json(#[from] serde_json::Error),
}

impl Cli {
    /// 读取输入内容，`-` 表示标准输入
    pub fn read_input(&self) -> Result<String, CliError> {
        if self.input.as_os_str() == STDIN {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            return Ok(buf);
        }
        Ok(std::fs::read_to_string(&self.input)?)
    }
}

/// 解析并投掷表达式，返回要打印的内容
///
/// 文本模式每个步骤一行，例如 `(1) + (1) + 3 = 5`
pub fn render(notation: &str, as_json: bool) -> Result<String, CliError> {
    let payload = notation::roll_payload_from_notation(notation)?;
    let response = RollService::new().roll(&payload)?;

    if as_json {
        return Ok(serde_json::to_string_pretty(&response)?);
    }

    let lines: Vec<String> = response.step.iter().map(|step| step.to_string()).collect();
    Ok(lines.join("\n"))
}

/// 命令行入口，返回进程退出码
pub fn run(cli: Cli) -> i32 {
    let result = cli
        .read_input()
        .and_then(|input| render(&input, cli.as_json));

    match result {
        Ok(output) => {
            println!("{}", output);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}
