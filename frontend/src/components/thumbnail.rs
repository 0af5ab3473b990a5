//! File preview: the image itself for raster images, an icon otherwise.

use common::file_document::FileType;
use common::thumbnail_icon::{ThumbnailIcon, ThumbnailSource, thumbnail_source};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_av_icons::MdMovie;
use dioxus_free_icons::icons::md_editor_icons::{MdInsertChart, MdInsertDriveFile, MdTextFields};
use dioxus_free_icons::icons::md_action_icons::MdDescription;
use dioxus_free_icons::icons::md_image_icons::{MdAudiotrack, MdGridOn, MdImage, MdPalette, MdPictureAsPdf};

#[component]
pub fn Thumbnail(
    file_type: ReadSignal<FileType>,
    extension: ReadSignal<String>,
    url: ReadSignal<String>,
    #[props(default = 44)] size: u32,
) -> Element {
    let source = use_memo(move || thumbnail_source(file_type(), &extension.read(), &url.read()));
    rsx! {
        figure {
            style: "
                display: flex;
                align-items: center;
                justify-content: center;
                flex-shrink: 0;
                width: {size}px;
                height: {size}px;
                margin: 0;
                border-radius: 50%;
                overflow: hidden;
                background: rgba(250, 114, 117, 0.1);
            ",
            {
                match source() {
                    ThumbnailSource::Url(src) => rsx! {
                        img {
                            src: "{src}",
                            alt: "thumbnail",
                            style: "width: 100%; height: 100%; object-fit: cover;",
                        }
                    },
                    ThumbnailSource::Icon(icon) => rsx! {
                        ThumbnailIconView { icon, size: size * 11 / 20 }
                    },
                }
            }
        }
    }
}

#[component]
fn ThumbnailIconView(icon: ThumbnailIcon, size: u32) -> Element {
    let style = format!("width: {size}px; height: {size}px; color: #FA7275;");
    match icon {
        ThumbnailIcon::Pdf => rsx! { Icon { icon: MdPictureAsPdf, style } },
        ThumbnailIcon::Doc => rsx! { Icon { icon: MdDescription, style } },
        ThumbnailIcon::Csv | ThumbnailIcon::Spreadsheet => rsx! { Icon { icon: MdGridOn, style } },
        ThumbnailIcon::Txt => rsx! { Icon { icon: MdTextFields, style } },
        ThumbnailIcon::Svg => rsx! { Icon { icon: MdPalette, style } },
        ThumbnailIcon::Video => rsx! { Icon { icon: MdMovie, style } },
        ThumbnailIcon::Audio => rsx! { Icon { icon: MdAudiotrack, style } },
        ThumbnailIcon::Image => rsx! { Icon { icon: MdImage, style } },
        ThumbnailIcon::Document => rsx! { Icon { icon: MdInsertChart, style } },
        ThumbnailIcon::Other => rsx! { Icon { icon: MdInsertDriveFile, style } },
    }
}
