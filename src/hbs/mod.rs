//! JSON Import/Export für Haxball-Stadion-Maps (.hbs).
//!
//! Dieses Modul implementiert das Parsen und Schreiben des .hbs-Formats.
//! Krümmung überquert die Dateigrenze ausschließlich als einzelnes
//! vorzeichenbehaftetes `curve`-Feld (Winkel-Äquivalent in Grad); das
//! `curveData`-Objekt wird beim Import toleriert, aber nie geschrieben.

mod schema;

pub mod parser;
pub mod writer;

pub use parser::parse_stadium;
pub use writer::write_stadium;
