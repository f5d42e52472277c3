//! 行输入辅助（阻塞式 stdin 读取）

use std::io::{self, BufRead, Write};

/// 打印提示符并阻塞读取一行输入，返回去掉行尾换行符的内容。
///
/// stdin 关闭（EOF）时返回 `UnexpectedEof`，由调用方作为致命错误上抛。
pub fn read_line<R: BufRead>(reader: &mut R, prompt: &str) -> io::Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
    }

    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(line)
}
