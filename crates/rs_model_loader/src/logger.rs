use std::{
    collections::HashSet,
    fs::File,
    io::{BufWriter, Write},
    sync::{Arc, Mutex, RwLock},
};

#[derive(Debug, Clone, Default)]
pub struct LoggerConfiguration {
    pub is_write_to_file: bool,
    pub is_flush_before_drop: bool,
}

/// Records below `Warn` severity are only kept for `rs_` targets and white listed targets.
pub fn is_target_allowed(target: &str, level: log::Level, white_list: &HashSet<String>) -> bool {
    if level <= log::Level::Warn || target.starts_with("rs_") {
        return true;
    }
    white_list.iter().any(|name| target.starts_with(name))
}

fn create_log_file() -> std::io::Result<BufWriter<File>> {
    std::fs::create_dir_all("./log")?;
    let file = File::create(format!(
        "./log/{}.log",
        chrono::Local::now().format("%Y_%m_%d-%H_%M_%S")
    ))?;
    Ok(BufWriter::new(file))
}

pub struct Logger {
    world_file: Arc<RwLock<Option<BufWriter<File>>>>,
    cfg: LoggerConfiguration,
    white_list: Arc<Mutex<HashSet<String>>>,
}

impl Logger {
    pub fn new(cfg: LoggerConfiguration) -> Logger {
        let mut buf_writer: Option<BufWriter<File>> = None;
        if cfg.is_write_to_file {
            match create_log_file() {
                Ok(writer) => {
                    buf_writer = Some(writer);
                }
                Err(err) => {
                    eprintln!("{err}");
                }
            }
        }

        let world_file = Arc::new(RwLock::new(buf_writer));
        let white_list = Arc::new(Mutex::new(HashSet::new()));
        let mut builder = env_logger::Builder::new();
        builder.write_style(env_logger::WriteStyle::Auto);
        builder.filter_level(log::LevelFilter::Trace);
        builder
            .format({
                let world_file = world_file.clone();
                let white_list = white_list.clone();
                move |buf, record| {
                    let level = record.level();
                    let is_allowed = match white_list.lock() {
                        Ok(white_list) => is_target_allowed(record.target(), level, &white_list),
                        Err(_) => true,
                    };
                    if !is_allowed {
                        return Ok(());
                    }
                    let current_thread = std::thread::current();
                    let thread_name = current_thread.name().unwrap_or("Unknown").to_string();
                    let file = record.file().unwrap_or("Unknown");
                    let line = record.line().unwrap_or(0);
                    if let Ok(mut writer) = world_file.write() {
                        if let Some(writer) = writer.as_mut() {
                            let _ = writeln!(
                                writer,
                                "{} [{}] [{}] {}:{} {}",
                                buf.timestamp_millis(),
                                level,
                                thread_name,
                                file,
                                line,
                                record.args()
                            );
                            if level <= log::Level::Warn {
                                let _ = writer.flush();
                            }
                        }
                    }
                    let level_style = buf.default_level_style(level);
                    writeln!(
                        buf,
                        "{} [{level_style}{}{level_style:#}] [{}] {}:{} {}",
                        buf.timestamp_millis(),
                        level,
                        thread_name,
                        file,
                        line,
                        record.args()
                    )
                }
            })
            .init();
        Logger {
            world_file,
            cfg,
            white_list,
        }
    }

    pub fn flush(&self) {
        if let Ok(mut writer) = self.world_file.write() {
            if let Some(writer) = writer.as_mut() {
                let _ = writer.flush();
            }
        }
    }

    pub fn add_white_list(&mut self, name: String) {
        if let Ok(mut list) = self.white_list.lock() {
            list.insert(name);
        }
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.cfg.is_flush_before_drop {
            self.flush();
        }
    }
}
