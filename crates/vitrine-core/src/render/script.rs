//! Client-side behavior of the preview page.
//!
//! Reads the `#preview-data` JSON island; never touches the network.

pub(super) const PIN_PANEL_SCRIPT: &str = r#"(function(){
  const island = document.getElementById('preview-data');
  if (!island) return;
  const data = JSON.parse(island.textContent || '{}');
  const profile = Object.assign({}, data.profile || {});
  const clamp = (value) => Math.min(70, Math.max(5, value));
  const sliders = Array.from(document.querySelectorAll('[data-weight]'));

  const normalize = () => {
    const raw = {};
    sliders.forEach((slider) => {
      const value = clamp(Number(slider.value) || 0);
      slider.value = String(value);
      raw[slider.dataset.weight] = value;
    });
    const total = Object.values(raw).reduce((sum, v) => sum + v, 0) || 1;
    const weights = {};
    Object.keys(raw).forEach((axis) => {
      weights[axis] = Number((raw[axis] / total).toFixed(4));
      const out = document.querySelector('[data-weight-out="' + axis + '"]');
      if (out) out.textContent = Math.round(weights[axis] * 100) + '%';
    });
    profile.weights = weights;
  };
  sliders.forEach((slider) => slider.addEventListener('change', normalize));

  const permalink = () => {
    const params = new URLSearchParams({
      seed: String(profile.seed),
      theme: profile.themeId || '',
      layout: profile.layoutId || '',
      pattern: profile.patternId || '',
      mockup: profile.mockupId || ''
    });
    return location.href.split('?')[0].split('#')[0] + '?' + params.toString();
  };

  const download = (name, text, type) => {
    const blob = new Blob([text], { type });
    const url = URL.createObjectURL(blob);
    const a = document.createElement('a');
    a.href = url;
    a.download = name;
    document.body.appendChild(a);
    a.click();
    requestAnimationFrame(() => {
      URL.revokeObjectURL(url);
      a.remove();
    });
  };

  const techSheet = () => {
    const lines = [
      '# Ficha Técnica',
      'Título: ' + data.title,
      'Domínio: ' + data.domain,
      'Dia UTC: ' + data.key,
      '',
      'Resumo:',
      data.why,
      '',
      'Variante:',
      '- Tema: ' + profile.themeId + ' (' + profile.accent + ')',
      '- Layout: ' + profile.layoutId + ' / ' + profile.heroMode,
      '- Padrão: ' + profile.patternId,
      '- Mockup: ' + profile.mockupId,
      '- Assinatura: ' + profile.signature,
      '',
      'Features essenciais:'
    ];
    (data.features || []).forEach((feature) => lines.push('- ' + feature));
    return lines.join('\n');
  };

  const on = (action, handler) => {
    const btn = document.querySelector('[data-action="' + action + '"]');
    if (btn) btn.addEventListener('click', handler);
  };

  on('permalink', () => {
    const link = permalink();
    const field = document.querySelector('[data-permalink]');
    if (field) field.value = link;
    if (navigator.clipboard) navigator.clipboard.writeText(link).catch(() => {});
  });
  on('export', () => {
    download('perfil-' + data.key + '.json', JSON.stringify(profile, null, 2), 'application/json');
  });
  on('sheet', () => {
    download('ficha-tecnica-' + (data.slug || 'preview') + '.txt', techSheet(), 'text/plain;charset=utf-8');
  });
}());"#;
