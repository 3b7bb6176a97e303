// JNI access to the host activity.
//
// The activity exposes launch methods plus static result slots
// (`getLastPhotoPaths`, `getLastError`, `clearLastError`) that are polled
// after a flow has been started.

use crate::config::AndroidPickerConfig;
use crate::outcome::{map_activity_error, parse_photo_paths};
use image_picker::PickError;
use jni::objects::{JClass, JObject, JString, JValue};
use jni::{JNIEnv, JavaVM};
use ndk_context::android_context;
use std::path::PathBuf;
use std::time::Instant;

fn jni_error(what: &str, e: impl std::fmt::Display) -> PickError {
    PickError::Other(format!("{}: {}", what, e))
}

pub(crate) fn java_vm() -> Result<JavaVM, PickError> {
    let vm_ptr = android_context().vm() as *mut *const jni::sys::JNIInvokeInterface_;
    unsafe { JavaVM::from_raw(vm_ptr) }.map_err(|e| jni_error("JavaVM failed", e))
}

fn get_app_class_loader<'a>(env: &mut JNIEnv<'a>) -> Result<JObject<'a>, PickError> {
    let at_cls = env
        .find_class("android/app/ActivityThread")
        .map_err(|e| jni_error("ActivityThread not found", e))?;
    let at = env
        .call_static_method(
            &at_cls,
            "currentActivityThread",
            "()Landroid/app/ActivityThread;",
            &[],
        )
        .and_then(|v| v.l())
        .map_err(|e| jni_error("currentActivityThread failed", e))?;

    // Prefer the application class loader, fall back to the system context
    let app = env
        .call_method(&at, "getApplication", "()Landroid/app/Application;", &[])
        .and_then(|v| v.l())
        .map_err(|e| jni_error("getApplication failed", e))?;

    let owner = if app.is_null() {
        env.call_method(&at, "getSystemContext", "()Landroid/app/ContextImpl;", &[])
            .and_then(|v| v.l())
            .map_err(|e| jni_error("getSystemContext failed", e))?
    } else {
        app
    };

    env.call_method(&owner, "getClassLoader", "()Ljava/lang/ClassLoader;", &[])
        .and_then(|v| v.l())
        .map_err(|e| jni_error("getClassLoader failed", e))
}

fn load_activity_class<'a>(
    env: &mut JNIEnv<'a>,
    loader: &JObject<'a>,
    config: &AndroidPickerConfig,
) -> Result<JClass<'a>, PickError> {
    let name: JString = env
        .new_string(config.main_activity_class_dotted())
        .map_err(|e| jni_error("new_string failed", e))?;
    let cls_obj = env
        .call_method(
            loader,
            "loadClass",
            "(Ljava/lang/String;)Ljava/lang/Class;",
            &[JValue::Object(&JObject::from(name))],
        )
        .and_then(|v| v.l())
        .map_err(|e| jni_error("ClassLoader.loadClass failed", e))?;
    Ok(JClass::from(cls_obj))
}

fn instance_via_companion<'a>(
    env: &mut JNIEnv<'a>,
    cls: &JClass<'a>,
    config: &AndroidPickerConfig,
    signature: &str,
) -> Result<JObject<'a>, PickError> {
    let comp_signature = format!("L{}$Companion;", config.main_activity_class);
    let comp_obj = env
        .get_static_field(cls, "Companion", &comp_signature)
        .and_then(|v| v.l())
        .map_err(|e| jni_error("Failed to get Companion field", e))?;

    if comp_obj.is_null() {
        return Err(PickError::Other(
            "MainActivity.Companion is null, activity not initialized?".to_string(),
        ));
    }

    env.call_method(&comp_obj, "getInstance", signature, &[])
        .and_then(|v| v.l())
        .map_err(|e| jni_error("Companion.getInstance() failed", e))
}

/// Resolves the running activity and its class
pub(crate) fn get_activity_instance<'a>(
    env: &mut JNIEnv<'a>,
    config: &AndroidPickerConfig,
) -> Result<(JObject<'a>, JClass<'a>), PickError> {
    let loader = get_app_class_loader(env)?;
    let cls = load_activity_class(env, &loader, config)?;
    let signature = format!("()L{};", config.main_activity_class);

    // `@JvmStatic getInstance()`, then a static `instance` field, then the Companion
    let instance = match env
        .call_static_method(&cls, "getInstance", &signature, &[])
        .and_then(|v| v.l())
    {
        Ok(inst) => inst,
        Err(_) => {
            if env.exception_check().unwrap_or(false) {
                let _ = env.exception_clear();
            }
            match env
                .get_static_field(&cls, "instance", &signature)
                .and_then(|v| v.l())
            {
                Ok(inst) if !inst.is_null() => inst,
                _ => {
                    if env.exception_check().unwrap_or(false) {
                        let _ = env.exception_clear();
                    }
                    instance_via_companion(env, &cls, config, &signature)?
                }
            }
        }
    };

    if instance.is_null() {
        return Err(PickError::Other(
            "MainActivity instance is null - Activity not initialized?".to_string(),
        ));
    }

    Ok((instance, cls))
}

/// Clears stale results and calls a launch method taking string arguments
pub(crate) fn call_launch(
    config: &AndroidPickerConfig,
    method: &str,
    args: &[&str],
) -> Result<(), PickError> {
    let vm = java_vm()?;
    let mut env = vm
        .attach_current_thread()
        .map_err(|e| jni_error("JNI attach failed", e))?;
    let (activity, main_cls) = get_activity_instance(&mut env, config)?;

    env.call_static_method(&main_cls, "clearLastError", "()V", &[])
        .map_err(|e| jni_error("clearLastError failed", e))?;

    let mut objects = Vec::with_capacity(args.len());
    for arg in args {
        let s = env
            .new_string(arg)
            .map_err(|e| jni_error("new_string failed", e))?;
        objects.push(JObject::from(s));
    }
    let values: Vec<JValue> = objects.iter().map(JValue::Object).collect();
    let signature = format!("({})V", "Ljava/lang/String;".repeat(args.len()));

    log::debug!("Calling {}{} on host activity", method, signature);
    env.call_method(&activity, method, &signature, &values)
        .map_err(|e| jni_error(&format!("{} failed", method), e))?;
    Ok(())
}

pub(crate) fn has_camera_permission(config: &AndroidPickerConfig) -> Result<bool, PickError> {
    let vm = java_vm()?;
    let mut env = vm
        .attach_current_thread()
        .map_err(|e| jni_error("JNI attach failed", e))?;
    let (activity, _cls) = get_activity_instance(&mut env, config)?;

    env.call_method(&activity, "hasCameraPermission", "()Z", &[])
        .and_then(|v| v.z())
        .map_err(|e| jni_error("hasCameraPermission failed", e))
}

fn read_static_string<'a>(
    env: &mut JNIEnv<'a>,
    cls: &JClass<'a>,
    method: &str,
) -> Result<Option<String>, PickError> {
    let obj = match env
        .call_static_method(cls, method, "()Ljava/lang/String;", &[])
        .and_then(|v| v.l())
    {
        Ok(obj) if !obj.is_null() => obj,
        _ => return Ok(None),
    };
    let value: String = env
        .get_string((&obj).into())
        .map_err(|e| jni_error("String conversion failed", e))?
        .into();
    Ok(Some(value))
}

/// Polls the activity until it reports paths, an error or the timeout hits
pub(crate) fn wait_for_outcome(config: &AndroidPickerConfig) -> Result<Vec<PathBuf>, PickError> {
    let vm = java_vm()?;
    let mut env = vm
        .attach_current_thread()
        .map_err(|e| jni_error("JNI attach failed", e))?;
    let (_activity, main_cls) = get_activity_instance(&mut env, config)?;

    let started = Instant::now();
    while started.elapsed() < config.timeout {
        std::thread::sleep(config.poll_interval);

        if let Some(combined) = read_static_string(&mut env, &main_cls, "getLastPhotoPaths")? {
            let paths = parse_photo_paths(&combined);
            if !paths.is_empty() {
                return Ok(paths);
            }
        }

        if let Some(message) = read_static_string(&mut env, &main_cls, "getLastError")? {
            return Err(map_activity_error(&message));
        }
    }

    Err(PickError::Timeout(
        "Image picker timeout - no selection made".to_string(),
    ))
}
