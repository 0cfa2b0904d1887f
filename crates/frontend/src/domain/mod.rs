pub mod a001_instock_inventory;
pub mod a002_qa_record;
