use chrono::{DateTime, Local};
use std::{fs, io::Error, process, time::SystemTime};
use uuid::Uuid;

mod algo;
pub use algo::*;

/// ファイル名を指定し、ファイルをString形式で読み込む
/// Result型なので、この関数の外側でエラーハンドリングを行うこと
pub fn read_file(filepath: &str) -> Result<String, Error> {
    let file_contents = fs::read_to_string(filepath)?;
    Ok(file_contents)
}

/// タイムスタンプとプロセスIDから実行用のIDを生成する
/// 形式は、%Y%m%d_%H%M%S_PID
pub fn generate_id() -> String {
    let current_time = SystemTime::now();
    let timestamp: DateTime<Local> = current_time.into();
    let time_str = timestamp.format("%Y%m%d_%H%M%S").to_string();

    let pid = process::id();

    format!("{}_{:010}", time_str, pid)
}

/// UUIDを生成する
pub fn generate_uuid() -> Uuid {
    Uuid::now_v7()
}

/// CSV形式の二次元配列を読み込む
pub fn string_to_vec2_bool(data: &str) -> Vec<Vec<bool>> {
    let mut o = vec![];

    for l in data.trim().lines() {
        let mut r = vec![];
        for v in l.trim().split(',') {
            if let Ok(b) = v.trim().parse::<usize>() {
                if b == 0 {
                    r.push(false);
                } else {
                    r.push(true);
                }
            }
        }

        o.push(r);
    }

    o
}
