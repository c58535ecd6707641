// Page wiring and presentation constants for the web front-end.
// Engine tuning lives in `core::constants`.

// Element ids the gallery mounts into
pub const GALLERY_ID: &str = "gallery";
pub const CONTAINER_ID: &str = "gallery-container";
pub const TITLE_CONTAINER_ID: &str = "title-container";
pub const AFFORDANCE_ID: &str = "click-to-view";
pub const SCROLL_REGION_ID: &str = "gallery-scroll"; // optional; scroll zoom is off without it

// Scroll distance (px) over which the pinned region maps progress 0 -> 1
pub const SCROLL_DISTANCE_PX: f32 = 1500.0;

// Frame timing
pub const MAX_FRAME_SECS: f32 = 0.1; // clamp long gaps (background tabs) so tweens don't jump

// Card rendering
pub const CARD_CLASS: &str = "card";
pub const CARD_PERSPECTIVE_PX: f32 = 1000.0;
pub const TITLE_WORD_CLASS: &str = "word";

// Image/title pairs the cards cycle through
pub const COLLECTION: [(&str, &str); 13] = [
    ("./images/img1.jpeg", "Image 1"),
    ("./images/img2.jpeg", "Image 2"),
    ("./images/img3.jpeg", "Image 3"),
    ("./images/img4.jpeg", "Image 4"),
    ("./images/img5.jpeg", "Image 5"),
    ("./images/img6.jpeg", "Image 6"),
    ("./images/img7.jpeg", "Image 7"),
    ("./images/img8.jpeg", "Image 8"),
    ("./images/img9.jpeg", "Image 9"),
    ("./images/img10.jpeg", "Image 10"),
    ("./images/img11.jpeg", "Image 11"),
    ("./images/img12.jpeg", "Image 12"),
    ("./images/img13.jpeg", "Image 13"),
];
