pub mod url_record;
