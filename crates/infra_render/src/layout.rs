//! Fixed quote layout
//!
//! Turns a [`QuoteRecord`] into positioned text. Coordinates follow the 2D
//! canvas convention: `y` is the text baseline, `x` is the anchor selected
//! by the alignment.
//!
//! A vertical cursor starts at [`CONTENT_TOP`] and moves down one
//! [`LINE_HEIGHT`] per printed line. Section headers add [`SECTION_GAP`]
//! above themselves.

use std::fmt;

use chrono::{DateTime, Utc};
use image::Rgba;

use core_kernel::ReferenceData;
use domain_quote::{CoverageSection, QuoteRecord};

pub const CANVAS_WIDTH: u32 = 1080;
pub const CANVAS_HEIGHT: u32 = 1080;

pub const BACKGROUND: Rgba<u8> = Rgba([0xff, 0xff, 0xff, 0xff]);
pub const PRIMARY_TEXT: Rgba<u8> = Rgba([0x00, 0x00, 0x00, 0xff]);
pub const LABEL_TEXT: Rgba<u8> = Rgba([0x55, 0x55, 0x55, 0xff]);

pub const TITLE: &str = "Car Insurance Quote";
pub const TITLE_BASELINE: f32 = 80.0;
pub const CONTENT_TOP: f32 = 150.0;
pub const LEFT_MARGIN: f32 = 100.0;
pub const LINE_HEIGHT: f32 = 40.0;
pub const VALUE_OFFSET: f32 = 350.0;
pub const SECTION_GAP: f32 = 20.0;
pub const FOOTER_INSET_RIGHT: f32 = 100.0;
pub const FOOTER_INSET_BOTTOM: f32 = 50.0;

/// Font face of a text run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontFace {
    Regular,
    Bold,
    Italic,
}

/// Face and pixel size of a text run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub face: FontFace,
    pub size_px: f32,
}

impl TextStyle {
    pub const TITLE: TextStyle = TextStyle { face: FontFace::Bold, size_px: 36.0 };
    pub const HEADER: TextStyle = TextStyle { face: FontFace::Bold, size_px: 28.0 };
    pub const BODY: TextStyle = TextStyle { face: FontFace::Regular, size_px: 24.0 };
    pub const FOOTER: TextStyle = TextStyle { face: FontFace::Italic, size_px: 20.0 };
}

/// Horizontal anchor of a text run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// One positioned run of text
#[derive(Debug, Clone, PartialEq)]
pub struct TextCommand {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub style: TextStyle,
    pub color: Rgba<u8>,
    pub align: TextAlign,
}

/// A logical line of the quote, independent of its pixels
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutLine {
    Title(String),
    Header(String),
    Field { label: String, value: String },
    Footer(String),
}

impl fmt::Display for LayoutLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutLine::Title(text) | LayoutLine::Header(text) | LayoutLine::Footer(text) => {
                f.write_str(text)
            }
            LayoutLine::Field { label, value } => write!(f, "{}: {}", label, value),
        }
    }
}

/// The complete layout of one quote image
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteLayout {
    lines: Vec<LayoutLine>,
    commands: Vec<TextCommand>,
}

impl QuoteLayout {
    /// Lays out a record
    ///
    /// # Arguments
    ///
    /// * `record` - The validated quote
    /// * `reference` - Lookup tables for coded ids
    /// * `generated_at` - Timestamp printed in the footer
    pub fn compose(
        record: &QuoteRecord,
        reference: &ReferenceData,
        generated_at: DateTime<Utc>,
    ) -> Self {
        let mut cursor = Cursor::new();

        cursor.title(TITLE);

        cursor.field("Customer", &record.fullname);
        cursor.field("Quote", &record.quote);
        cursor.field("Company", reference.companies.label(&record.company));
        cursor.field("Installments", &record.installments);
        cursor.field(
            "Term Duration",
            &format!("{} months", record.term_duration_in_months),
        );
        cursor.field("Fee Amount", &record.fee_amount);

        for section in CoverageSection::ALL {
            if let Some(amounts) = record.coverage(section).amounts() {
                cursor.header(section.title());
                cursor.field("Full Amount", &amounts.full_amount);
                cursor.field("Down Payment", &amounts.down_payment);
                cursor.field("Monthly Payment", &amounts.installments);
            }
        }

        cursor.header("Additional Options");
        cursor.field("Has Renters Insurance", yes_no(record.has_renters));
        cursor.field("Car Financed", yes_no(record.is_car_financed));
        cursor.field("Rental Car", yes_no(record.is_rental_car));
        cursor.field(
            "Franchise Amount",
            reference.franchise_amounts.label(&record.franchise_amount),
        );
        cursor.field(
            "Medical Insurance",
            reference
                .medical_insurance_amounts
                .label(&record.medical_insurance_amount),
        );
        cursor.field(
            "Property Damage",
            reference
                .property_damage_amounts
                .label(&record.property_damage_insurance_amount),
        );

        cursor.footer(&format!(
            "Generated on: {}",
            generated_at.format("%-m/%-d/%Y")
        ));

        QuoteLayout {
            lines: cursor.lines,
            commands: cursor.commands,
        }
    }

    /// Returns the logical lines in paint order
    pub fn lines(&self) -> &[LayoutLine] {
        &self.lines
    }

    /// Returns the positioned text runs in paint order
    pub fn commands(&self) -> &[TextCommand] {
        &self.commands
    }

    /// Returns every line as the text a reader would see
    pub fn text_lines(&self) -> Vec<String> {
        self.lines.iter().map(ToString::to_string).collect()
    }

    /// Returns every line except the generation timestamp
    pub fn content_lines(&self) -> Vec<String> {
        self.lines
            .iter()
            .filter(|line| !matches!(line, LayoutLine::Footer(_)))
            .map(ToString::to_string)
            .collect()
    }

    /// Returns true if a line reads exactly `text`
    pub fn contains_line(&self, text: &str) -> bool {
        self.lines.iter().any(|line| line.to_string() == text)
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

struct Cursor {
    y: f32,
    lines: Vec<LayoutLine>,
    commands: Vec<TextCommand>,
}

impl Cursor {
    fn new() -> Self {
        Self {
            y: CONTENT_TOP,
            lines: Vec::new(),
            commands: Vec::new(),
        }
    }

    fn push(&mut self, text: &str, x: f32, y: f32, style: TextStyle, color: Rgba<u8>, align: TextAlign) {
        self.commands.push(TextCommand {
            text: text.to_string(),
            x,
            y,
            style,
            color,
            align,
        });
    }

    fn title(&mut self, text: &str) {
        self.push(
            text,
            CANVAS_WIDTH as f32 / 2.0,
            TITLE_BASELINE,
            TextStyle::TITLE,
            PRIMARY_TEXT,
            TextAlign::Center,
        );
        self.lines.push(LayoutLine::Title(text.to_string()));
    }

    fn field(&mut self, label: &str, value: &str) {
        let y = self.y;
        self.push(&format!("{}:", label), LEFT_MARGIN, y, TextStyle::BODY, LABEL_TEXT, TextAlign::Left);
        self.push(
            value,
            LEFT_MARGIN + VALUE_OFFSET,
            y,
            TextStyle::BODY,
            PRIMARY_TEXT,
            TextAlign::Left,
        );
        self.lines.push(LayoutLine::Field {
            label: label.to_string(),
            value: value.to_string(),
        });
        self.y += LINE_HEIGHT;
    }

    fn header(&mut self, text: &str) {
        self.y += SECTION_GAP;
        let y = self.y;
        self.push(text, LEFT_MARGIN, y, TextStyle::HEADER, PRIMARY_TEXT, TextAlign::Left);
        self.lines.push(LayoutLine::Header(text.to_string()));
        self.y += LINE_HEIGHT;
    }

    fn footer(&mut self, text: &str) {
        self.push(
            text,
            CANVAS_WIDTH as f32 - FOOTER_INSET_RIGHT,
            CANVAS_HEIGHT as f32 - FOOTER_INSET_BOTTOM,
            TextStyle::FOOTER,
            LABEL_TEXT,
            TextAlign::Right,
        );
        self.lines.push(LayoutLine::Footer(text.to_string()));
    }
}
