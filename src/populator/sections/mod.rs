//! Section renderers
//!
//! Each module turns one section slice of the Site Document into the
//! fragments for its target regions. An absent or empty slice yields no
//! fragments, which leaves the skeleton's regions untouched.

pub mod about;
pub mod contact;
pub mod faq;
pub mod highlights;
pub mod lab;
pub mod map;
pub mod news;
pub mod photos;
pub mod projects;
pub mod publications;
pub mod team;
pub mod vacancies;
