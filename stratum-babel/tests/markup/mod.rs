//! Import tests shared by the element based formats (HTML, JSON).

mod html;
mod json;
