//! Tests for quote layout, painting and image export

use std::sync::{Arc, Mutex};
use std::time::Duration;

use core_kernel::ReferenceData;
use domain_quote::{Notification, NotificationKind, QuoteRecord};
use image::Rgba;
use infra_render::{
    file_name_for, DirectorySink, FontPainter, FontSources, ImageSink, QuoteCanvas, QuoteImage, QuoteImageGenerator,
    QuoteLayout, RenderError, RenderSettings, TextAlign, TextStyle, CANVAS_HEIGHT, CANVAS_WIDTH,
};
use test_utils::{
    assert_has_line, assert_has_pixel, assert_no_line_starting_with, assert_png, BlockPainter,
    RecordFixtures, TimeFixtures,
};

fn compose(record: &QuoteRecord) -> QuoteLayout {
    QuoteLayout::compose(record, &ReferenceData::standard(), TimeFixtures::generated_at())
}

fn generator(painter: Arc<BlockPainter>) -> QuoteImageGenerator {
    QuoteImageGenerator::new(painter, ReferenceData::standard(), RenderSettings::immediate())
}

#[derive(Default)]
struct RecordingNotifier {
    seen: Mutex<Vec<Notification>>,
}

impl domain_quote::Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.seen.lock().unwrap().push(notification);
    }
}

impl RecordingNotifier {
    fn seen(&self) -> Vec<Notification> {
        self.seen.lock().unwrap().clone()
    }
}

/// Sink that refuses every image
struct FailingSink;

#[async_trait::async_trait]
impl ImageSink for FailingSink {
    async fn deliver(&self, _image: &QuoteImage) -> Result<(), RenderError> {
        Err(RenderError::delivery("disk full"))
    }
}

// ============================================================================
// Layout
// ============================================================================

mod layout {
    use super::*;

    #[test]
    fn test_jane_doe_layout() {
        let layout = compose(&RecordFixtures::jane_doe());

        assert_has_line(&layout, "Car Insurance Quote");
        assert_has_line(&layout, "Customer: Jane Doe");
        assert_has_line(&layout, "Company: Progressive");
        assert_has_line(&layout, "Term Duration: 12 months");
        assert_has_line(&layout, "Third Party Coverage");
        assert_has_line(&layout, "Full Amount: $800");
        assert_has_line(&layout, "Down Payment: $100");
        assert_has_line(&layout, "Monthly Payment: $66.67");
        assert_has_line(&layout, "Has Renters Insurance: Yes");
        assert_has_line(&layout, "Franchise Amount: $1,000");
        assert_has_line(&layout, "Medical Insurance: $5,000");
        assert_has_line(&layout, "Property Damage: $50,000");
        assert_has_line(&layout, "Generated on: 3/5/2024");
        assert_no_line_starting_with(&layout, "Complete Coverage");
    }

    #[test]
    fn test_content_order() {
        let layout = compose(&RecordFixtures::full_coverage());

        let lines = layout.content_lines();
        let position = |text: &str| lines.iter().position(|l| l == text).unwrap();

        assert_eq!(lines[0], "Car Insurance Quote");
        assert_eq!(lines[1], "Customer: Jane Doe");
        assert!(position("Fee Amount: $50") < position("Complete Coverage"));
        assert!(position("Complete Coverage") < position("Third Party Coverage"));
        assert!(position("Third Party Coverage") < position("Additional Options"));
        assert_eq!(lines.last().unwrap(), "Property Damage: $50,000");
    }

    #[test]
    fn test_unknown_ids_fall_back_to_raw_id() {
        let layout = compose(&RecordFixtures::unknown_ids());

        assert_has_line(&layout, "Company: id-99");
        assert_has_line(&layout, "Franchise Amount: id-42");
        assert_has_line(&layout, "Medical Insurance: custom");
        assert_has_line(&layout, "Property Damage: id-0");
    }

    #[test]
    fn test_content_is_independent_of_render_time() {
        let record = RecordFixtures::full_coverage();
        let reference = ReferenceData::standard();

        let first = QuoteLayout::compose(&record, &reference, TimeFixtures::generated_at());
        let second = QuoteLayout::compose(&record, &reference, TimeFixtures::later());

        assert_eq!(first.content_lines(), second.content_lines());
        assert_ne!(first.text_lines(), second.text_lines());
    }

    #[test]
    fn test_section_header_spacing() {
        let layout = compose(&RecordFixtures::jane_doe());
        let commands = layout.commands();

        let fee = commands.iter().find(|c| c.text == "Fee Amount:").unwrap();
        let header = commands.iter().find(|c| c.text == "Third Party Coverage").unwrap();
        let full = commands.iter().find(|c| c.text == "Full Amount:").unwrap();

        assert_eq!(header.y, fee.y + 40.0 + 20.0);
        assert_eq!(header.style, TextStyle::HEADER);
        assert_eq!(full.y, header.y + 40.0);
    }

    #[test]
    fn test_title_and_footer_placement() {
        let layout = compose(&RecordFixtures::jane_doe());
        let commands = layout.commands();

        let title = &commands[0];
        assert_eq!((title.x, title.y), (540.0, 80.0));
        assert_eq!(title.align, TextAlign::Center);

        let footer = commands.last().unwrap();
        assert_eq!((footer.x, footer.y), (980.0, 1030.0));
        assert_eq!(footer.align, TextAlign::Right);
        assert_eq!(footer.style, TextStyle::FOOTER);
    }
}

// ============================================================================
// Canvas
// ============================================================================

mod canvas {
    use super::*;

    #[test]
    fn test_paint_then_capture_yields_png() {
        let painter = BlockPainter::shared();
        let mut canvas = QuoteCanvas::standard(painter.clone());

        canvas.paint(&compose(&RecordFixtures::jane_doe())).unwrap();
        let png = canvas.capture().unwrap();

        let image = assert_png(&png, CANVAS_WIDTH, CANVAS_HEIGHT);
        assert_has_pixel(&image, Rgba([0xff, 0xff, 0xff, 0xff]));
        assert_has_pixel(&image, Rgba([0x55, 0x55, 0x55, 0xff]));
        assert_has_pixel(&image, Rgba([0x00, 0x00, 0x00, 0xff]));
    }

    #[test]
    fn test_alignment_uses_measured_width() {
        let painter = BlockPainter::shared();
        let mut canvas = QuoteCanvas::standard(painter.clone());

        canvas.paint(&compose(&RecordFixtures::jane_doe())).unwrap();

        let title = painter.find("Car Insurance Quote").unwrap();
        let title_width = 19.0 * 36.0 * 0.5;
        assert_eq!(title.x, 540.0 - title_width / 2.0);

        let footer = painter.find("Generated on: 3/5/2024").unwrap();
        let footer_width = 22.0 * 20.0 * 0.5;
        assert_eq!(footer.x, 980.0 - footer_width);

        let label = painter.find("Customer:").unwrap();
        assert_eq!((label.x, label.baseline), (100.0, 150.0));
        let value = painter.find("Jane Doe").unwrap();
        assert_eq!((value.x, value.baseline), (450.0, 150.0));
    }

    /// Horizontal extent of non-background ink within a band of rows
    fn ink_columns(image: &image::RgbaImage, rows: std::ops::Range<u32>) -> Option<(u32, u32)> {
        let mut extent: Option<(u32, u32)> = None;
        for y in rows {
            for x in 0..image.width() {
                if image.get_pixel(x, y) != &Rgba([0xff, 0xff, 0xff, 0xff]) {
                    extent = Some(match extent {
                        Some((min, max)) => (min.min(x), max.max(x)),
                        None => (x, x),
                    });
                }
            }
        }
        extent
    }

    #[test]
    fn test_font_painter_places_title_and_footer() {
        // Only meaningful where the system fonts are installed
        let Ok(painter) = FontPainter::load(&FontSources::default()) else {
            return;
        };
        let mut canvas = QuoteCanvas::standard(Arc::new(painter));

        canvas.paint(&compose(&RecordFixtures::jane_doe())).unwrap();
        let image = assert_png(&canvas.capture().unwrap(), CANVAS_WIDTH, CANVAS_HEIGHT).to_rgba8();

        let (left, right) = ink_columns(&image, 40..100).expect("title has ink");
        let centre = (left + right) as f32 / 2.0;
        assert!((centre - 540.0).abs() <= 6.0, "title centred at {}", centre);

        let (_, footer_right) = ink_columns(&image, 1005..1045).expect("footer has ink");
        // Italic glyphs may overhang their advance by a pixel or two
        assert!(footer_right <= 982, "footer ends at {}", footer_right);
        assert!(footer_right >= 960, "footer ends at {}", footer_right);
    }

    #[test]
    fn test_repaint_replaces_previous_surface() {
        let painter = BlockPainter::shared();
        let mut canvas = QuoteCanvas::standard(painter.clone());

        canvas.paint(&compose(&RecordFixtures::full_coverage())).unwrap();
        canvas.paint(&compose(&RecordFixtures::jane_doe())).unwrap();
        let second = canvas.capture().unwrap();

        let mut fresh = QuoteCanvas::standard(BlockPainter::shared());
        fresh.paint(&compose(&RecordFixtures::jane_doe())).unwrap();
        assert_eq!(second, fresh.capture().unwrap());
    }

    #[test]
    fn test_same_record_renders_identically() {
        let layout = compose(&RecordFixtures::jane_doe());

        let mut first = QuoteCanvas::standard(BlockPainter::shared());
        first.paint(&layout).unwrap();
        let mut second = QuoteCanvas::standard(BlockPainter::shared());
        second.paint(&layout).unwrap();

        assert_eq!(first.capture().unwrap(), second.capture().unwrap());
    }
}

// ============================================================================
// Generator
// ============================================================================

mod generator {
    use super::*;

    #[tokio::test]
    async fn test_render_image_metadata() {
        let mut generator = generator(BlockPainter::shared());
        let at = TimeFixtures::generated_at();

        let image = generator
            .render_image(&RecordFixtures::jane_doe(), at)
            .await
            .unwrap();

        assert_eq!(image.file_name, file_name_for(at));
        assert_eq!(image.file_name, "car-insurance-quote-1709649000000.png");
        assert_eq!((image.width, image.height), (1080, 1080));
        assert_eq!(image.content_type(), "image/png");
        assert_png(&image.png, 1080, 1080);
    }

    #[tokio::test(start_paused = true)]
    async fn test_settle_delay_runs_before_capture() {
        let settings = RenderSettings::default();
        assert_eq!(settings.settle_delay, Duration::from_millis(300));

        let mut generator =
            QuoteImageGenerator::new(BlockPainter::shared(), ReferenceData::standard(), settings);
        let started = tokio::time::Instant::now();

        generator
            .render_image(&RecordFixtures::jane_doe(), TimeFixtures::generated_at())
            .await
            .unwrap();

        assert!(started.elapsed() >= Duration::from_millis(300));
    }

    #[tokio::test]
    async fn test_generate_delivers_and_notifies() {
        let dir = tempfile::tempdir().unwrap();
        let sink = DirectorySink::new(dir.path().join("quotes"));
        let notifier = RecordingNotifier::default();
        let mut generator = generator(BlockPainter::shared());
        let record = RecordFixtures::jane_doe();

        let generated = generator.generate(&record, &sink, &notifier).await.unwrap();

        assert_eq!(generated.record, record);
        let written = std::fs::read(sink.path_for(&generated.image)).unwrap();
        assert_eq!(written, generated.image.png);

        let seen = notifier.seen();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].kind, NotificationKind::Success);
        assert_eq!(seen[0].title, "Quote submitted successfully!");
        assert!(seen[0].description.as_ref().unwrap().contains("Jane Doe"));
    }

    #[tokio::test]
    async fn test_directory_sink_leaves_no_partial_files() {
        let dir = tempfile::tempdir().unwrap();
        let sink = DirectorySink::new(dir.path());
        let mut generator = generator(BlockPainter::shared());

        let image = generator
            .render_image(&RecordFixtures::jane_doe(), TimeFixtures::generated_at())
            .await
            .unwrap();
        sink.deliver(&image).await.unwrap();

        let names: Vec<String> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec![image.file_name.clone()]);
    }

    #[tokio::test]
    async fn test_surface_failure_notifies_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let sink = DirectorySink::new(dir.path());
        let notifier = RecordingNotifier::default();
        let canvas = QuoteCanvas::new(0, 0, BlockPainter::shared());
        let mut generator = QuoteImageGenerator::with_canvas(
            canvas,
            ReferenceData::standard(),
            RenderSettings::immediate(),
        );

        let result = generator
            .generate(&RecordFixtures::jane_doe(), &sink, &notifier)
            .await;

        assert!(matches!(result, Err(RenderError::SurfaceUnavailable(_))));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
        let seen = notifier.seen();
        assert_eq!(seen.len(), 1);
        assert!(seen[0].is_error());
        assert_eq!(seen[0].title, "Failed to create quote image");
    }

    #[tokio::test]
    async fn test_delivery_failure_notifies() {
        let notifier = RecordingNotifier::default();
        let mut generator = generator(BlockPainter::shared());

        let result = generator
            .generate(&RecordFixtures::jane_doe(), &FailingSink, &notifier)
            .await;

        assert!(matches!(result, Err(RenderError::Delivery(_))));
        let seen = notifier.seen();
        assert_eq!(
            seen[0].title,
            "Failed to generate quote image. Please try again."
        );
    }

    #[tokio::test]
    async fn test_generator_is_reusable() {
        let mut generator = generator(BlockPainter::shared());

        let first = generator
            .render_image(&RecordFixtures::jane_doe(), TimeFixtures::generated_at())
            .await
            .unwrap();
        let second = generator
            .render_image(&RecordFixtures::jane_doe(), TimeFixtures::generated_at())
            .await
            .unwrap();

        assert_eq!(first, second);
    }
}

// ============================================================================
// Errors
// ============================================================================

mod errors {
    use super::*;

    #[test]
    fn test_error_notifications() {
        assert_eq!(
            RenderError::NoCanvas.notification().title,
            "No quote canvas found"
        );
        assert_eq!(
            RenderError::surface("no context").notification().title,
            "Failed to create quote image"
        );
        assert_eq!(
            RenderError::EmptyImage.notification().title,
            "Failed to generate quote image. Please try again."
        );
        assert!(RenderError::EmptyImage.notification().is_error());
    }
}

// ============================================================================
// Properties
// ============================================================================

mod properties {
    use super::*;
    use domain_quote::{CoverageSection, QuoteValidator};
    use proptest::prelude::*;
    use test_utils::{unknown_id_strategy, valid_form_strategy};

    proptest! {
        #[test]
        fn prop_sections_appear_only_when_active(values in valid_form_strategy()) {
            let record = QuoteValidator::validate(&values).unwrap();
            let layout = compose(&record);

            for section in CoverageSection::ALL {
                prop_assert_eq!(
                    layout.contains_line(section.title()),
                    record.coverage(section).is_active()
                );
            }
            prop_assert!(layout.contains_line("Additional Options"));
        }

        #[test]
        fn prop_unknown_company_prints_raw_id(id in unknown_id_strategy()) {
            let record = QuoteRecord {
                company: id.clone(),
                ..RecordFixtures::jane_doe()
            };
            let layout = compose(&record);

            let expected = format!("Company: {}", id);
            prop_assert!(layout.contains_line(&expected));
        }
    }
}
