//! 控制台日志封装
//!
//! wasm 目标写入浏览器控制台，原生目标（单元测试）写入 stderr。
//! 被「吞掉」的错误（会话解析失败、尽力而为的远程登出失败等）
//! 都应经过这里留下痕迹，而不是无声丢弃。

#[cfg(target_arch = "wasm32")]
pub fn log(msg: &str) {
    web_sys::console::log_1(&msg.into());
}

#[cfg(target_arch = "wasm32")]
pub fn warn(msg: &str) {
    web_sys::console::warn_1(&msg.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn log(msg: &str) {
    eprintln!("{}", msg);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn warn(msg: &str) {
    eprintln!("{}", msg);
}
