// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// 创建逐行处理的进度条
///
/// 进度条绘制在 stderr；非终端环境下 indicatif 会自动隐藏。
pub fn row_progress(len: usize, label: &str) -> ProgressBar {
    let bar = ProgressBar::with_draw_target(Some(len as u64), ProgressDrawTarget::stderr());
    if let Ok(style) =
        ProgressStyle::with_template("{msg} [{bar:40.cyan/blue}] {pos}/{len} ({elapsed})")
    {
        bar.set_style(style.progress_chars("=> "));
    }
    bar.set_message(label.to_string());
    bar
}
