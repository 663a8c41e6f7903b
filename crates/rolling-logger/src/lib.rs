//! Rolling file logger for Tauri applications.
//!
//! Installs a tracing subscriber writing to a size-rotated log file; the
//! `log` facade is bridged through the subscriber, so both `log` and
//! `tracing` macros end up in the same file. A small circular set of
//! rotated files is kept.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::fmt::MakeWriter;

/// Rotate once the active file passes this size
const MAX_FILE_SIZE: u64 = 2 * 1024 * 1024;
/// Rotated files kept besides the active one
const KEEP_ROTATED: usize = 3;

struct FileState {
    file: File,
    size: u64,
}

/// A log file that rotates itself by size.
///
/// `name.log` is active; rotation shifts it to `name.log.1`, pushing
/// older files up to `.KEEP_ROTATED` and dropping the oldest.
pub struct RollingFile {
    base: PathBuf,
    max_size: u64,
    state: Mutex<FileState>,
}

impl RollingFile {
    pub fn open(base: PathBuf, max_size: u64) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(&base)?;
        let size = file.metadata()?.len();
        Ok(Self {
            base,
            max_size,
            state: Mutex::new(FileState { file, size }),
        })
    }

    fn rotated_path(&self, idx: usize) -> PathBuf {
        let mut os = self.base.clone().into_os_string();
        os.push(format!(".{}", idx));
        PathBuf::from(os)
    }

    fn write_all(&self, buf: &[u8]) -> io::Result<usize> {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());

        if state.size + buf.len() as u64 > self.max_size {
            // Shift name.log.2 -> name.log.3, name.log.1 -> name.log.2, ...
            let _ = std::fs::remove_file(self.rotated_path(KEEP_ROTATED));
            for idx in (1..KEEP_ROTATED).rev() {
                let _ = std::fs::rename(self.rotated_path(idx), self.rotated_path(idx + 1));
            }
            state.file.flush()?;
            std::fs::rename(&self.base, self.rotated_path(1))?;
            state.file = OpenOptions::new().create(true).append(true).open(&self.base)?;
            state.size = 0;
        }

        state.file.write_all(buf)?;
        state.size += buf.len() as u64;
        Ok(buf.len())
    }

    fn flush(&self) -> io::Result<()> {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.file.flush()
    }
}

/// Handle given to the subscriber for each write
pub struct RollingHandle {
    file: Arc<RollingFile>,
}

impl Write for RollingHandle {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write_all(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

#[derive(Clone)]
struct RollingMakeWriter {
    file: Arc<RollingFile>,
}

impl<'a> MakeWriter<'a> for RollingMakeWriter {
    type Writer = RollingHandle;

    fn make_writer(&'a self) -> Self::Writer {
        RollingHandle {
            file: self.file.clone(),
        }
    }
}

struct ChronoTime;

impl FormatTime for ChronoTime {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

/// Initialize the global logger writing to `<log_dir>/<app_name>.log`.
///
/// On Android the platform logcat logger is installed instead.
pub fn init_logger(log_dir: PathBuf, app_name: &str) -> Result<(), String> {
    #[cfg(target_os = "android")]
    {
        let _ = log_dir;
        android_logger::init_once(
            android_logger::Config::default()
                .with_max_level(log::LevelFilter::Info)
                .with_tag(app_name),
        );
        return Ok(());
    }

    #[cfg(not(target_os = "android"))]
    {
        std::fs::create_dir_all(&log_dir).map_err(|e| format!("create log dir: {}", e))?;
        let base = log_dir.join(format!("{}.log", app_name));
        let file = RollingFile::open(base, MAX_FILE_SIZE).map_err(|e| format!("open log file: {}", e))?;

        tracing_subscriber::fmt()
            .with_writer(RollingMakeWriter { file: Arc::new(file) })
            .with_timer(ChronoTime)
            .with_ansi(false)
            .with_max_level(tracing::Level::INFO)
            .try_init()
            .map_err(|e| format!("install subscriber: {}", e))
    }
}

/// Log an info line through the facade
pub fn info(msg: &str) -> Result<(), String> {
    log::info!("{}", msg);
    Ok(())
}

/// Log a warning line through the facade
pub fn warn(msg: &str) -> Result<(), String> {
    log::warn!("{}", msg);
    Ok(())
}

/// Log an error line through the facade
pub fn error(msg: &str) -> Result<(), String> {
    log::error!("{}", msg);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appends_to_active_file() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("app.log");
        let file = RollingFile::open(base.clone(), 1024).unwrap();

        file.write_all(b"hello\n").unwrap();
        file.write_all(b"world\n").unwrap();
        file.flush().unwrap();

        let content = std::fs::read_to_string(&base).unwrap();
        assert_eq!(content, "hello\nworld\n");
    }

    #[test]
    fn test_rotates_by_size() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("app.log");
        let file = RollingFile::open(base.clone(), 16).unwrap();

        file.write_all(b"0123456789\n").unwrap();
        // This write would exceed 16 bytes, so the first line rotates out
        file.write_all(b"abcdefghij\n").unwrap();
        file.flush().unwrap();

        let active = std::fs::read_to_string(&base).unwrap();
        assert_eq!(active, "abcdefghij\n");

        let rotated = std::fs::read_to_string(dir.path().join("app.log.1")).unwrap();
        assert_eq!(rotated, "0123456789\n");
    }

    #[test]
    fn test_keeps_bounded_history() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("app.log");
        let file = RollingFile::open(base.clone(), 4).unwrap();

        for i in 0..6 {
            file.write_all(format!("{}xxx\n", i).as_bytes()).unwrap();
        }
        file.flush().unwrap();

        assert!(base.exists());
        assert!(dir.path().join("app.log.1").exists());
        assert!(dir.path().join("app.log.3").exists());
        assert!(!dir.path().join("app.log.4").exists());
    }
}
