// src/services/report_service.rs
//! Relatório da turma em PDF (lista de alunos).
//!
//! O documento usa as fontes Helvetica padrão do PDF (sem embutir ficheiros),
//! com WinAnsiEncoding para os acentos do português.
use crate::{
    error::{AppError, AppResult},
    models::{aluno::RosterEntry, turma::Turma},
    services::{aluno_service, turma_service},
};
use chrono::{Local, NaiveDate};
use lopdf::{
    content::{Content, Operation},
    dictionary, Document, Object, ObjectId, Stream,
};
use sqlx::SqlitePool;

// Página Letter em pontos, margens de 50pt
const PAGE_WIDTH: i64 = 612;
const PAGE_HEIGHT: i64 = 792;
const MARGIN: i64 = 50;
const CONTENT_BOTTOM: i64 = 90;
const FOOTER_Y: i64 = 60;
const LINE_GAP: i64 = 4;
const CONTENT_WIDTH: i64 = PAGE_WIDTH - 2 * MARGIN;

pub const SEM_ALUNOS: &str = "Nenhum aluno cadastrado nesta turma.";

/// PDF gerado e o nome de ficheiro sugerido para download.
#[derive(Debug)]
pub struct RosterReport {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Turma inexistente é `NotFound`; turma sem alunos gera um PDF válido
/// que o diz explicitamente.
pub async fn generate_class_roster(db_pool: &SqlitePool, turma_id: i64) -> AppResult<RosterReport> {
    let turma = turma_service::get_turma(db_pool, turma_id).await?;
    let alunos = aluno_service::roster_for_turma(db_pool, turma_id).await?;
    tracing::info!(
        "📄 Gerando relatório da turma '{}' ({} alunos)",
        turma.nome,
        alunos.len()
    );

    let bytes = render_roster(&turma, &alunos, Local::now().date_naive())?;
    Ok(RosterReport {
        filename: roster_filename(&turma.nome),
        bytes,
    })
}

/// `Relatorio_Turma_<nome>.pdf`, cada sequência de espaços vira `_`.
pub fn roster_filename(nome: &str) -> String {
    let mut safe = String::with_capacity(nome.len());
    let mut in_space = false;
    for c in nome.chars() {
        if c.is_whitespace() {
            if !in_space {
                safe.push('_');
            }
            in_space = true;
        } else {
            safe.push(c);
            in_space = false;
        }
    }
    format!("Relatorio_Turma_{safe}.pdf")
}

pub fn render_roster(turma: &Turma, alunos: &[RosterEntry], generated_on: NaiveDate) -> AppResult<Vec<u8>> {
    let pages = layout_roster(turma, alunos, generated_on);
    build_document(pages)
}

#[derive(Debug, Clone, Copy)]
enum Font {
    Regular,
    Bold,
    Italic,
}

impl Font {
    fn resource(self) -> &'static str {
        match self {
            Font::Regular => "F1",
            Font::Bold => "F2",
            Font::Italic => "F3",
        }
    }
}

/// Cursor de escrita de cima para baixo, com quebra de página automática.
struct Layout {
    pages: Vec<Vec<Operation>>,
    current: Vec<Operation>,
    y: i64,
}

impl Layout {
    fn new() -> Self {
        Self {
            pages: Vec::new(),
            current: Vec::new(),
            y: PAGE_HEIGHT - MARGIN,
        }
    }

    /// Texto alinhado à margem; quebra em várias linhas se passar da largura útil.
    fn line(&mut self, font: Font, size: i64, text: &str) {
        for piece in wrap_text(text, size, CONTENT_WIDTH) {
            self.place(font, size, MARGIN, &piece);
        }
    }

    fn centered(&mut self, font: Font, size: i64, text: &str) {
        let x = (PAGE_WIDTH - approx_text_width(text, size)) / 2;
        self.place(font, size, x.max(MARGIN), text);
    }

    fn place(&mut self, font: Font, size: i64, x: i64, text: &str) {
        if self.y - size < CONTENT_BOTTOM {
            self.new_page();
        }
        self.y -= size;
        self.current.extend(text_ops(font, size, x, self.y, text));
        self.y -= LINE_GAP;
    }

    fn gap(&mut self, points: i64) {
        self.y -= points;
    }

    /// Linha separadora horizontal de margem a margem.
    fn rule(&mut self) {
        self.y -= LINE_GAP;
        self.current.extend([
            Operation::new("w", vec![Object::Integer(1)]),
            Operation::new("m", vec![Object::Integer(MARGIN), Object::Integer(self.y)]),
            Operation::new("l", vec![Object::Integer(PAGE_WIDTH - MARGIN), Object::Integer(self.y)]),
            Operation::new("S", vec![]),
        ]);
    }

    fn new_page(&mut self) {
        self.pages.push(std::mem::take(&mut self.current));
        self.y = PAGE_HEIGHT - MARGIN;
    }

    /// Fecha a última página e põe o rodapé em todas.
    fn finish(mut self, footer: &str) -> Vec<Vec<Operation>> {
        self.pages.push(std::mem::take(&mut self.current));
        let x = (PAGE_WIDTH - approx_text_width(footer, 8)) / 2;
        for page in &mut self.pages {
            page.extend(text_ops(Font::Regular, 8, x, FOOTER_Y, footer));
        }
        self.pages
    }
}

fn layout_roster(turma: &Turma, alunos: &[RosterEntry], generated_on: NaiveDate) -> Vec<Vec<Operation>> {
    let mut layout = Layout::new();

    layout.centered(Font::Bold, 18, "Relatório da Turma");
    layout.gap(14);

    layout.line(Font::Bold, 14, "Dados da Turma");
    layout.line(Font::Regular, 12, &format!("Nome: {}", turma.nome));
    layout.line(Font::Regular, 12, &format!("Série: {}", turma.serie));
    layout.line(Font::Regular, 12, &format!("Ano Letivo: {}", turma.ano));
    let professor = turma.professor.as_deref().unwrap_or("Não definido");
    layout.line(Font::Regular, 12, &format!("Professor(a): {professor}"));
    layout.gap(28);

    layout.line(Font::Bold, 14, "Lista de Alunos");
    layout.rule();
    layout.gap(10);

    if alunos.is_empty() {
        layout.line(Font::Italic, 11, SEM_ALUNOS);
    } else {
        for (index, aluno) in alunos.iter().enumerate() {
            layout.line(
                Font::Regular,
                11,
                &format!(
                    "{}. {} | CPF: {} | Status: {}",
                    index + 1,
                    aluno.nome_completo,
                    aluno.cpf,
                    aluno.status
                ),
            );
        }
    }

    layout.finish(&format!("Gerado em: {}", generated_on.format("%d/%m/%Y")))
}

fn text_ops(font: Font, size: i64, x: i64, y: i64, text: &str) -> Vec<Operation> {
    vec![
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec![font.resource().into(), Object::Integer(size)]),
        Operation::new("Td", vec![Object::Integer(x), Object::Integer(y)]),
        Operation::new("Tj", vec![Object::string_literal(win_ansi(text))]),
        Operation::new("ET", vec![]),
    ]
}

/// Largura média da Helvetica (~0.5 em por caractere); só serve para centrar.
fn approx_text_width(text: &str, size: i64) -> i64 {
    text.chars().count() as i64 * size / 2
}

/// Quebra por palavras para caber em `max_width`; palavras maiores que a
/// linha são cortadas por caractere.
fn wrap_text(text: &str, size: i64, max_width: i64) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };
        if approx_text_width(&candidate, size) <= max_width {
            current = candidate;
            continue;
        }
        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        for c in word.chars() {
            current.push(c);
            if current.chars().count() > 1 && approx_text_width(&current, size) > max_width {
                current.pop();
                lines.push(std::mem::take(&mut current));
                current.push(c);
            }
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Latin-1 coincide com WinAnsi nos caracteres acentuados; o resto vira '?'.
fn win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?'))
        .collect()
}

fn font_object(doc: &mut Document, base_font: &str) -> ObjectId {
    doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => base_font,
        "Encoding" => "WinAnsiEncoding",
    })
}

fn build_document(pages: Vec<Vec<Operation>>) -> AppResult<Vec<u8>> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let regular = font_object(&mut doc, "Helvetica");
    let bold = font_object(&mut doc, "Helvetica-Bold");
    let italic = font_object(&mut doc, "Helvetica-Oblique");
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => regular,
            "F2" => bold,
            "F3" => italic,
        },
    });

    let mut kids = Vec::with_capacity(pages.len());
    for operations in pages {
        let content = Content { operations }
            .encode()
            .map_err(|e| AppError::ReportError(e.to_string()))?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, content));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(Object::Reference(page_id));
    }

    let page_count = kids.len() as i64;
    let pages_dict = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => Object::Integer(page_count),
        "Resources" => resources_id,
        "MediaBox" => vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Integer(PAGE_WIDTH),
            Object::Integer(PAGE_HEIGHT),
        ],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)
        .map_err(|e| AppError::ReportError(e.to_string()))?;
    Ok(bytes)
}
