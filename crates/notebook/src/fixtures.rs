//! Notebook builders shared by the unit tests.

use crate::document::NotebookDocument;
use crate::transform::{Notebook, NotebookOptions};
use serde_json::{json, Value};

pub fn markdown(lines: &[&str]) -> Value {
    json!({"cell_type": "markdown", "metadata": {}, "source": lines})
}

pub fn code(lines: &[&str]) -> Value {
    json!({
        "cell_type": "code",
        "execution_count": null,
        "metadata": {},
        "outputs": [],
        "source": lines
    })
}

pub fn raw(lines: &[&str]) -> Value {
    json!({"cell_type": "raw", "metadata": {}, "source": lines})
}

pub fn document(cells: Vec<Value>) -> NotebookDocument {
    serde_json::from_value(json!({
        "cells": cells,
        "metadata": {"kernelspec": {"name": "python3", "language": "python"}},
        "nbformat": 4,
        "nbformat_minor": 5
    }))
    .expect("Valid notebook fixture")
}

pub fn notebook(cells: Vec<Value>) -> Notebook {
    Notebook::new(document(cells), false).expect("Notebook fixture is parsable")
}

pub fn notebook_with(cells: Vec<Value>, options: NotebookOptions) -> Notebook {
    Notebook::with_options(document(cells), options).expect("Notebook fixture is parsable")
}
