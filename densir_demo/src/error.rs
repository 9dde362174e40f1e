// Copyright 2025 the Densir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::io;
use std::path::PathBuf;

use densir_shape::ShapeError;

/// Everything that can stop the demo from writing its SVG.
#[derive(Debug, thiserror::Error)]
pub(crate) enum DemoError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid sample data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("cannot lay out the violin plot: {0}")]
    Shape(#[from] ShapeError),
    #[error("cannot install the logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}
