//! # Presentation Layer
//!
//! User interface logic for the CLI, arranged as an adaptation of
//! **MVVM (Model-View-ViewModel)**.
//!
//! ## Data Flow
//!
//! ### Console output (`render`, `resolve`, `routes`, `init`)
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> [ serde_json ] --> Output
//!    (Controller)      (Converter)       (Data)          (Driver)  ==(Text)==> [ View ] --> Output
//! ```
//!
//! ### Interactive browser (`browse`)
//!
//! ```text
//! [ Handler ] --> [ BrowserRenderer ] --(UiEvent)--> [ App ]
//!                        |                              |
//!                        | <------- present_screen -----+
//!                        v
//!                 [ ScreenViewModel ] --> [ views::tui widgets ]
//! ```
//!
//! ## Rules
//!
//! 1. **Raw data in view models.** JSON output is an API: rects are cell
//!    numbers, reveal progress is a fraction, hrefs are already formatted
//!    for the addressing mode.
//! 2. **JSON ignores `ViewMode`.** `ViewMode` only decides whether text views
//!    emit ANSI colors.
//! 3. **UI state stays in the renderer.** The pointer position and the
//!    address being typed belong to `BrowserRenderer`; routing, scroll,
//!    focus and reveals belong to the runtime `App`.
//! 4. **One page drawing.** `views::page::draw_page` paints through the
//!    `Surface` trait, so the text canvas and the ratatui buffer show the
//!    same page.
//!
//! ## Where does code go?
//!
//! | If you need to... | Go to... |
//! |-------------------|----------|
//! | Add a field to the JSON output | **`view_models/`** |
//! | Compute hrefs, reveal progress or hover flags | **`presenters/`** |
//! | Change a color or a glyph | **`views/`** |
//! | Bind a key or a mouse button | **`renderers/tui.rs`** |

pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{BrowserRenderer, ConsoleRenderer, Renderer};
