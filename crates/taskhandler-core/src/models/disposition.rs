use std::fmt::{Display, Formatter, Result as FmtResult};

/// Classified outcome of an existence check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    Found,
    InvalidLocation,
    ContainerNotFound,
    ObjectNotFound,
    BackendError,
}

impl Disposition {
    pub fn http_status_code(&self) -> u16 {
        match self {
            Disposition::Found => 200,
            Disposition::InvalidLocation => 400,
            Disposition::ContainerNotFound => 400,
            Disposition::ObjectNotFound => 404,
            Disposition::BackendError => 500,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Disposition::Found => "found",
            Disposition::InvalidLocation => "invalid_location",
            Disposition::ContainerNotFound => "container_not_found",
            Disposition::ObjectNotFound => "object_not_found",
            Disposition::BackendError => "backend_error",
        }
    }
}

impl Display for Disposition {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}
