mod contact;
mod navbar;
mod sections;
