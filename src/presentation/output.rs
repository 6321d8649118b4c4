// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::path::PathBuf;

use chrono::{DateTime, Local};
use clap::ValueEnum;
use tracing::info;

use crate::application::use_cases::mode::ParserMode;
use crate::config::settings::StorageSettings;
use crate::domain::models::result_table::ResultTable;
use crate::infrastructure::storage::LocalStorage;
use crate::utils::errors::ParserError;

const DATETIME_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";
const CSV_SEPARATOR: char = ',';

/// 附加输出方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// 带边框的表格
    Pretty,
    /// 写入 CSV 文件
    File,
}

/// 输出结果表
///
/// 未指定输出方式时逐行打印；`File` 模式返回写入的文件路径。
pub async fn control_output(
    table: &ResultTable,
    output: Option<OutputFormat>,
    mode: ParserMode,
    storage: &StorageSettings,
) -> Result<Option<PathBuf>, ParserError> {
    match output {
        None => {
            print!("{}", render_plain(table));
            Ok(None)
        }
        Some(OutputFormat::Pretty) => {
            print!("{}", render_pretty(table));
            Ok(None)
        }
        Some(OutputFormat::File) => {
            let path = file_output(table, mode, storage, Local::now()).await?;
            Ok(Some(path))
        }
    }
}

/// 每行一条记录，单元格以空格分隔
pub fn render_plain(table: &ResultTable) -> String {
    let mut out = String::new();
    for row in table.all_rows() {
        out.push_str(&row.join(" "));
        out.push('\n');
    }
    out
}

/// 左对齐的边框表格，表头与数据之间有分隔线
pub fn render_pretty(table: &ResultTable) -> String {
    let mut widths = vec![0usize; table.width()];
    for row in table.all_rows() {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let border = {
        let mut line = String::from("+");
        for width in &widths {
            line.push_str(&"-".repeat(width + 2));
            line.push('+');
        }
        line.push('\n');
        line
    };
    let format_row = |row: &[String]| {
        let mut line = String::from("|");
        for (cell, width) in row.iter().zip(&widths) {
            let pad = width - cell.chars().count();
            line.push(' ');
            line.push_str(cell);
            line.push_str(&" ".repeat(pad + 1));
            line.push('|');
        }
        line.push('\n');
        line
    };

    let mut out = border.clone();
    out.push_str(&format_row(table.header()));
    out.push_str(&border);
    for row in table.rows() {
        out.push_str(&format_row(row.as_slice()));
    }
    out.push_str(&border);
    out
}

fn needs_quotes(field: &str) -> bool {
    field.contains(CSV_SEPARATOR)
        || field.contains('"')
        || field.contains('\n')
        || field.contains('\r')
}

/// 以 CSV 格式序列化结果表（含表头）
pub fn to_csv(table: &ResultTable) -> String {
    let mut out = String::new();
    for row in table.all_rows() {
        let mut first = true;
        for cell in row {
            if !first {
                out.push(CSV_SEPARATOR);
            }
            first = false;
            if needs_quotes(cell) {
                out.push('"');
                out.push_str(&cell.replace('"', "\"\""));
                out.push('"');
            } else {
                out.push_str(cell);
            }
        }
        out.push('\n');
    }
    out
}

/// 结果文件名：`{mode}_{YYYY-mm-dd_HH-MM-SS}.csv`
pub fn results_file_name(mode: ParserMode, now: DateTime<Local>) -> String {
    format!("{}_{}.csv", mode, now.format(DATETIME_FORMAT))
}

/// 写入结果目录，返回文件路径
pub async fn file_output(
    table: &ResultTable,
    mode: ParserMode,
    storage: &StorageSettings,
    now: DateTime<Local>,
) -> Result<PathBuf, ParserError> {
    let results = LocalStorage::new(&storage.results_dir);
    let path = results
        .save(&results_file_name(mode, now), to_csv(table).as_bytes())
        .await?;
    info!(path = %path.display(), "Results file saved");
    Ok(path)
}
