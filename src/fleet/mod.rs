use serde::de::DeserializeOwned;
use std::{
    fs::File,
    io::{self},
    path::PathBuf,
};
use thiserror::Error;
use tracing::warn;
use zip::{ZipArchive, read::ZipFile};

mod config;
mod demo;
pub mod models;
pub use config::*;
pub use demo::demo;
use models::*;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("Csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Could not find file with name: {0}")]
    FileNotFound(String),
}

#[derive(Default)]
pub enum StorageType {
    #[default]
    None,
    Zip(PathBuf),
    Memory(FleetData),
}

/// A source of fleet tables: buses, their stops and the dates they run on.
#[derive(Default)]
pub struct Fleet {
    config: Config,
    storage: StorageType,
}

impl Fleet {
    pub fn new(config: self::Config) -> Self {
        Self {
            config,
            storage: Default::default(),
        }
    }

    pub fn from_zip(mut self, path: PathBuf) -> Self {
        self.storage = StorageType::Zip(path);
        self
    }

    pub fn from_data(mut self, data: FleetData) -> Self {
        self.storage = StorageType::Memory(data);
        self
    }

    pub fn stream_buses<F>(&self, f: F) -> Result<(), self::Error>
    where
        F: FnMut((usize, FleetBus)),
    {
        match &self.storage {
            StorageType::None => Ok(()),
            StorageType::Zip(path) => {
                stream_from_zip::<FleetBus, F>(path, &self.config.buses_file_name, f)
            }
            StorageType::Memory(data) => stream_from_memory(&data.buses, f),
        }
    }

    pub fn stream_stops<F>(&self, f: F) -> Result<(), self::Error>
    where
        F: FnMut((usize, FleetStop)),
    {
        match &self.storage {
            StorageType::None => Ok(()),
            StorageType::Zip(path) => {
                stream_from_zip::<FleetStop, F>(path, &self.config.stops_file_name, f)
            }
            StorageType::Memory(data) => stream_from_memory(&data.stops, f),
        }
    }

    pub fn stream_service_dates<F>(&self, f: F) -> Result<(), self::Error>
    where
        F: FnMut((usize, FleetServiceDate)),
    {
        match &self.storage {
            StorageType::None => Ok(()),
            StorageType::Zip(path) => stream_from_zip::<FleetServiceDate, F>(
                path,
                &self.config.service_dates_file_name,
                f,
            ),
            StorageType::Memory(data) => stream_from_memory(&data.service_dates, f),
        }
    }
}

fn stream_from_memory<T, F>(rows: &[T], f: F) -> Result<(), self::Error>
where
    T: Clone,
    F: FnMut((usize, T)),
{
    rows.iter().cloned().enumerate().for_each(f);
    Ok(())
}

fn stream_from_zip<T, F>(zip_path: &PathBuf, file_name: &str, f: F) -> Result<(), self::Error>
where
    T: DeserializeOwned,
    F: FnMut((usize, T)),
{
    let zip_file = File::open(zip_path)?;
    let mut archive = ZipArchive::new(zip_file)?;
    let file = get_file(&mut archive, file_name)?;
    let mut reader = csv::Reader::from_reader(file);
    reader
        .deserialize::<T>()
        .filter_map(|row| match row {
            Ok(value) => Some(value),
            Err(err) => {
                warn!("Skipping malformed row in {file_name}: {err}");
                None
            }
        })
        .enumerate()
        .for_each(f);
    Ok(())
}

fn get_file<'a>(
    archive: &'a mut ZipArchive<File>,
    name: &'a str,
) -> Result<ZipFile<'a, File>, self::Error> {
    let index = archive
        .index_for_name(name)
        .ok_or(self::Error::FileNotFound(name.to_string()))?;
    let file = archive.by_index(index)?;
    Ok(file)
}
