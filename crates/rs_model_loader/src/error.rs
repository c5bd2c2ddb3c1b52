#[derive(Debug)]
pub enum Error {
    Import(String),
    IncompleteScene(String),
    MissingRootNode(String),
    IO(std::io::Error, Option<String>),
    Settings(serde_json::Error),
    ThreadPool(String),
    #[cfg(feature = "assimp")]
    Assimp(rs_assimp::error::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(format!("{:?}", self).as_ref())
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
