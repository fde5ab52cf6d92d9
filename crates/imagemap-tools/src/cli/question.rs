use crate::opt;
use anyhow::{Context, Error};
use imagemap_core::imagemap::map_file::{image_map_html, import_image_map};
use imagemap_core::imagemap::{DuplicateOverrides, QtiExportOptions};
use imagemap_model::question::ImageMapQuestion;

pub(crate) async fn create(o: opt::Create) -> Result<(), Error> {
    let content = tokio::fs::read_to_string(&o.file)
        .await
        .with_context(|| format!("failed to read {}", o.file.display()))?;
    let mut question: ImageMapQuestion = serde_json::from_str(&content)?;
    question.id = None;

    let service = o.service.build().await?;
    let question_id = service.persist(&mut question, o.original_id).await?;
    println!("Created question {question_id}");
    Ok(())
}

pub(crate) async fn show(o: opt::Show) -> Result<(), Error> {
    let service = o.service.build().await?;
    let question = service.load(o.question_id).await?;
    match o.html {
        Some(href) => println!("{}", image_map_html(&question, &href)),
        None => println!("{}", serde_json::to_string_pretty(&question)?),
    }
    Ok(())
}

pub(crate) async fn image(o: opt::Image) -> Result<(), Error> {
    let filename = o
        .file
        .file_name()
        .and_then(|name| name.to_str())
        .with_context(|| format!("{} has no usable file name", o.file.display()))?
        .to_owned();
    let content = tokio::fs::read(&o.file)
        .await
        .with_context(|| format!("failed to read {}", o.file.display()))?;

    let service = o.service.build().await?;
    let mut question = service.load(o.question_id).await?;
    service.store_image(&mut question, &filename, &content).await?;
    service.persist(&mut question, None).await?;
    println!("Stored image {} for question {}", question.image_filename(), o.question_id);
    Ok(())
}

pub(crate) async fn import_map(o: opt::ImportMap) -> Result<(), Error> {
    let contents = tokio::fs::read_to_string(&o.file)
        .await
        .with_context(|| format!("failed to read {}", o.file.display()))?;

    let service = o.service.build().await?;
    let mut question = service.load(o.question_id).await?;
    let imported = import_image_map(&mut question, &contents);
    service.persist(&mut question, None).await?;
    println!("Imported {imported} areas into question {}", o.question_id);
    Ok(())
}

pub(crate) async fn export(o: opt::Export) -> Result<(), Error> {
    let options = QtiExportOptions {
        include_header: o.header,
        include_binary: o.image,
        force_image_reference: o.image_reference,
    };

    let service = o.service.build().await?;
    let question = service.load(o.question_id).await?;
    let xml = service.export_qti(&question, options).await?;
    match o.output {
        Some(path) => {
            tokio::fs::write(&path, xml)
                .await
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("Exported question {} to {}", o.question_id, path.display());
        }
        None => println!("{xml}"),
    }
    Ok(())
}

pub(crate) async fn duplicate(o: opt::Duplicate) -> Result<(), Error> {
    let overrides = DuplicateOverrides {
        title: o.title,
        author: o.author,
        owner: o.owner,
    };

    let service = o.service.build().await?;
    let source = service.load(o.question_id).await?;
    let question_id = service.duplicate(&source, o.for_test, overrides).await?;
    println!("Duplicated question {} as {question_id}", o.question_id);
    Ok(())
}

pub(crate) async fn copy(o: opt::CopyObject) -> Result<(), Error> {
    let service = o.service.build().await?;
    let source = service.load(o.question_id).await?;
    let question_id = service.copy_object(&source, o.pool, o.title).await?;
    println!("Copied question {} into pool {} as {question_id}", o.question_id, o.pool);
    Ok(())
}

pub(crate) async fn sync(o: opt::SyncOriginal) -> Result<(), Error> {
    let service = o.service.build().await?;
    let question = service.load(o.question_id).await?;
    service.sync_with_original(&question).await?;
    if let Some(original_id) = question.original_id {
        println!("Synced question {} onto {original_id}", o.question_id);
    }
    Ok(())
}
