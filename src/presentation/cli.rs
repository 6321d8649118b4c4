// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use clap::Parser;

use crate::application::use_cases::mode::ParserMode;
use crate::presentation::output::OutputFormat;

/// Python 文档解析器命令行参数
#[derive(Parser, Debug)]
#[command(name = "pydocs-parser", version, about = "Python documentation parser")]
pub struct Cli {
    /// 解析模式
    #[arg(value_enum)]
    pub mode: ParserMode,

    /// 运行前清空HTTP响应缓存
    #[arg(short = 'c', long)]
    pub clear_cache: bool,

    /// 附加输出方式
    #[arg(short = 'o', long, value_enum)]
    pub output: Option<OutputFormat>,
}
