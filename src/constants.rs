//! Common constants used throughout doc-init.

/// Default root directory that holds every generated section.
pub const DEFAULT_BASE_DOCS_PATH: &str = "docs";

/// Sidebar descriptor written into every section and subsection directory.
pub const CATEGORY_FILE: &str = "_category_.json";

/// Extension of generated content documents.
pub const DOCUMENT_EXTENSION: &str = ".mdx";

/// Name of the directory that collects assets of a container or a single file.
pub const ASSETS_DIR: &str = "assets";

/// File that keeps an otherwise empty assets directory under version control.
pub const PLACEHOLDER_FILE: &str = "__placeholder__";

pub const PLACEHOLDER_CONTENT: &str = "# Placeholder file for version control
# This file ensures the assets directory is tracked by git
# You can delete this file once you add actual assets";

/// Display class attached to top-level section descriptors.
pub const SECTION_CLASS_NAME: &str = "sidebar-header";

/// Environment toggle consulted when no interactive answer can be read.
pub const AUTO_CONFIRM_ENV: &str = "DOC_INIT_AUTO_CONFIRM";

/// The only value of [`AUTO_CONFIRM_ENV`] that confirms the run.
pub const AUTO_CONFIRM_VALUE: &str = "yes";
