use std::fmt::Debug;

pub fn init() {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
    .init();
}

/// Turn a missing value or an error into a logged `anyhow` error.
pub trait LogExt<T> {
  fn log_warn(self, msg: &str) -> anyhow::Result<T>;
  fn log_error(self, msg: &str) -> anyhow::Result<T>;
}

impl<T> LogExt<T> for Option<T> {
  #[track_caller]
  fn log_warn(self, msg: &str) -> anyhow::Result<T> {
    let Some(value) = self else {
      let location = std::panic::Location::caller().to_string();
      log::warn!(location; "{msg}");
      anyhow::bail!(msg.to_string())
    };

    Ok(value)
  }

  #[track_caller]
  fn log_error(self, msg: &str) -> anyhow::Result<T> {
    let Some(value) = self else {
      let location = std::panic::Location::caller().to_string();
      log::error!(location; "{msg}");
      anyhow::bail!(msg.to_string())
    };

    Ok(value)
  }
}

impl<T, E> LogExt<T> for Result<T, E> where E: Debug {
  #[track_caller]
  fn log_warn(self, msg: &str) -> anyhow::Result<T> {
    let location = std::panic::Location::caller();

    self.map_err(|error| {
      log::warn!("[{location}] {msg}: {error:?}");

      anyhow::anyhow!("{msg}: {error:?}")
    })
  }

  #[track_caller]
  fn log_error(self, msg: &str) -> anyhow::Result<T> {
    let location = std::panic::Location::caller();

    self.map_err(|error| {
      log::error!("[{location}] {msg}: {error:?}");

      anyhow::anyhow!("{msg}: {error:?}")
    })
  }
}
