use std::io::{self, Read};

use anyhow::{Context, Result};
use log::warn;
use zip::{read::ZipFile, ZipArchive};

pub struct ZipReader<R> {
    archive: ZipArchive<R>,
}

impl<R: Read + io::Seek> ZipReader<R> {
    pub fn new(reader: R) -> Result<ZipReader<R>> {
        let archive = ZipArchive::new(reader).context("Failed to open")?;
        Ok(ZipReader { archive })
    }

    pub fn get_by_path(&mut self, path: &str) -> Result<ZipEntry> {
        self.archive
            .by_name(path)
            .with_context(|| format!("Failed to open {}", path))
            .map(|file| ZipEntry { file })
    }
}

pub struct ZipEntry<'a> {
    file: ZipFile<'a>,
}

impl ZipEntry<'_> {
    pub fn name(&self) -> &str {
        self.file.name()
    }

    pub fn as_bytes(&mut self) -> Result<Vec<u8>> {
        let mut data = Vec::<u8>::new();
        self.file
            .read_to_end(&mut data)
            .with_context(|| format!("Failed to read {}", self.name()))?;

        Ok(data)
    }

    // BOM があればそれに従い、なければ UTF-8 として読む
    pub fn as_text(&mut self) -> Result<String> {
        let bytes = self.as_bytes()?;
        let (text, _, had_errors) = encoding_rs::UTF_8.decode(&bytes);
        if had_errors {
            warn!("{} contains malformed characters", self.name());
        }
        Ok(text.into_owned())
    }
}
