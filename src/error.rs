use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("{series} length mismatch: {left} labels vs {right} values")]
    SeriesLengthMismatch {
        series: &'static str,
        left: usize,
        right: usize,
    },

    #[error("mount point `{0}` does not exist")]
    MissingMountPoint(String),

    #[error("mount point `{0}` is already bound to a chart")]
    MountPointAlreadyBound(String),

    #[error("no chart is mounted on `{0}`")]
    NotMounted(String),
}
