use iced::widget::{button, column, container, row, slider, text, Column};
use iced::widget::image as iced_image;
use iced::{Alignment, ContentFit, Element, Length, Task, Theme};
use rfd::FileDialog;
use std::ops::RangeInclusive;

// Declare the application modules
mod color;
mod errors;
mod filter;
mod io;
mod state;

use errors::EditorError;
use state::data::{RenderedFrame, SourceImage};
use state::effects::{self, EffectParams};
use state::session::Session;

/// File extensions offered by the open dialog
const IMAGE_EXTENSIONS: [&str; 8] = ["png", "jpg", "jpeg", "gif", "bmp", "webp", "tif", "tiff"];

/// Main application state
struct PolaroidStudio {
    /// The editing session: photo, sliders and rendered frame
    session: Session,
    /// Cached preview of the most recent accepted render
    preview: Option<iced_image::Handle>,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User clicked the "Open Photo" button
    OpenImage,
    /// Background decode completed
    ImageLoaded(Result<SourceImage, EditorError>),
    /// Slider moves
    BlurChanged(f32),
    FlashChanged(f32),
    SepiaChanged(f32),
    VignetteChanged(f32),
    GrainChanged(f32),
    /// User clicked "Reset" to restore the default look
    ResetEffects,
    /// Background render completed, tagged with its generation
    RenderComplete(u64, Result<RenderedFrame, EditorError>),
    /// User clicked the "Export PNG" button
    ExportImage,
    /// Background export completed
    ExportComplete(Result<std::path::PathBuf, EditorError>),
}

impl PolaroidStudio {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        println!("📸 Polaroid Studio initialized");

        (
            PolaroidStudio {
                session: Session::new(),
                preview: None,
                status: String::from("Open a photo to get started."),
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::OpenImage => {
                // Show the native file picker, constrained to image files
                let file = FileDialog::new()
                    .set_title("Select a Photo")
                    .add_filter("Images", &IMAGE_EXTENSIONS)
                    .pick_file();

                // A dismissed picker is a silent no-op
                if let Some(path) = file {
                    self.status = format!("Loading {}...", path.display());
                    return Task::perform(io::loader::load_image(path), Message::ImageLoaded);
                }

                Task::none()
            }
            Message::ImageLoaded(Ok(source)) => {
                self.status = format!("Loaded photo ({}x{}).", source.width(), source.height());
                self.session.replace_image(source);
                self.schedule_render()
            }
            Message::ImageLoaded(Err(error)) => {
                // Previous photo (if any) stays loaded and displayed
                self.status = format!("⚠️  {}", error);
                Task::none()
            }
            Message::BlurChanged(value) => {
                self.session.params_mut().set_blur(value);
                self.schedule_render()
            }
            Message::FlashChanged(value) => {
                self.session.params_mut().set_flash(value);
                self.schedule_render()
            }
            Message::SepiaChanged(value) => {
                self.session.params_mut().set_sepia(value);
                self.schedule_render()
            }
            Message::VignetteChanged(value) => {
                self.session.params_mut().set_vignette(value);
                self.schedule_render()
            }
            Message::GrainChanged(value) => {
                self.session.params_mut().set_grain(value);
                self.schedule_render()
            }
            Message::ResetEffects => {
                self.session.params_mut().reset();
                self.schedule_render()
            }
            Message::RenderComplete(generation, Ok(frame)) => {
                if self.session.complete_render(generation, frame) {
                    if let Some(frame) = self.session.frame() {
                        self.preview = Some(iced_image::Handle::from_rgba(
                            frame.width(),
                            frame.height(),
                            frame.pixels.as_raw().clone(),
                        ));
                    }
                } else {
                    // A newer render was scheduled while this one ran
                    println!("⏭️  Discarded stale render (generation {})", generation);
                }
                Task::none()
            }
            Message::RenderComplete(_, Err(error)) => {
                // Keep showing the previous frame
                self.status = format!("⚠️  {}", error);
                Task::none()
            }
            Message::ExportImage => {
                let Some(frame) = self.session.frame() else {
                    self.status = String::from("Nothing to export yet - open a photo first.");
                    return Task::none();
                };

                let file = FileDialog::new()
                    .set_title("Save Photo")
                    .set_file_name(io::exporter::EXPORT_FILE_NAME)
                    .save_file();

                if let Some(path) = file {
                    self.status = String::from("Exporting...");
                    return Task::perform(
                        io::exporter::export_png(frame.clone(), path),
                        Message::ExportComplete,
                    );
                }

                Task::none()
            }
            Message::ExportComplete(Ok(path)) => {
                self.status = format!("✅ Saved {}", path.display());
                Task::none()
            }
            Message::ExportComplete(Err(error)) => {
                self.status = format!("⚠️  {}", error);
                Task::none()
            }
        }
    }

    /// Schedule a full re-render of the current photo
    ///
    /// Called on every image or parameter change. The render runs on a
    /// blocking task tagged with a fresh generation; completions carrying
    /// an older generation are discarded in `update`.
    fn schedule_render(&mut self) -> Task<Message> {
        let Some(source) = self.session.source() else {
            return Task::none();
        };

        let source = source.clone();
        let params = *self.session.params();
        let generation = self.session.begin_render();

        Task::perform(render_async(source, params), move |result| {
            Message::RenderComplete(generation, result)
        })
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let params = self.session.params();

        let controls: Column<Message> = column![
            text("Polaroid Studio").size(32),
            button("Open Photo").on_press(Message::OpenImage).padding(10),
            labeled_slider("Blur", params.blur, effects::BLUR_RANGE, 0.1, Message::BlurChanged),
            labeled_slider("Flash", params.flash, effects::FLASH_RANGE, 1.0, Message::FlashChanged),
            labeled_slider("Sepia", params.sepia, effects::SEPIA_RANGE, 1.0, Message::SepiaChanged),
            labeled_slider(
                "Vignette",
                params.vignette,
                effects::VIGNETTE_RANGE,
                1.0,
                Message::VignetteChanged,
            ),
            labeled_slider("Grain", params.grain, effects::GRAIN_RANGE, 1.0, Message::GrainChanged),
            row![
                button("Reset").on_press(Message::ResetEffects).padding(10),
                button("Export PNG").on_press(Message::ExportImage).padding(10),
            ]
            .spacing(10),
            text(&self.status).size(14),
        ]
        .spacing(16)
        .padding(20)
        .width(Length::Fixed(280.0))
        .align_x(Alignment::Start);

        let preview: Element<Message> = match &self.preview {
            Some(handle) => iced_image(handle.clone())
                .content_fit(ContentFit::Contain)
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
            None => text("Open a photo to see the live preview").size(20).into(),
        };

        let preview_pane = container(preview)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill);

        row![controls, preview_pane].into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }
}

/// A slider with its label and live value readout
fn labeled_slider<'a>(
    label: &str,
    value: f32,
    range: RangeInclusive<f32>,
    step: f32,
    on_change: impl Fn(f32) -> Message + 'a,
) -> Column<'a, Message> {
    column![
        text(format!("{}: {:.1}", label, value)).size(14),
        slider(range, value, on_change).step(step),
    ]
    .spacing(4)
}

/// Run the filter engine on a blocking task
///
/// The engine itself is synchronous; running it off the UI thread keeps
/// slider interaction smooth on large photos.
async fn render_async(
    source: SourceImage,
    params: EffectParams,
) -> Result<RenderedFrame, EditorError> {
    tokio::task::spawn_blocking(move || filter::engine::render(&source, &params))
        .await
        .map_err(|e| EditorError::RenderUnavailable(e.to_string()))
}

fn main() -> iced::Result {
    iced::application(
        "Polaroid Studio",
        PolaroidStudio::update,
        PolaroidStudio::view,
    )
    .theme(PolaroidStudio::theme)
    .centered()
    .run_with(PolaroidStudio::new)
}
